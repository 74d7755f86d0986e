fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_explorer::explorer_controller()
}
