use mandelbrot_explorer::{GridSize, runtime_calculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let size = GridSize::new(1000, 1000)?;
    let mut rng = rand::thread_rng();

    println!("Timing the five rendering variants at 1000x1000...");
    runtime_calculator(size, &mut rng, "runtimes.txt")?;
    println!("Wrote runtimes.txt");

    Ok(())
}
