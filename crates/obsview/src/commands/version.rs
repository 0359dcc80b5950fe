pub fn run() -> anyhow::Result<()> {
    println!("obsview {}", env!("CARGO_PKG_VERSION"));
    println!("Trace trees and evaluations for LLM applications");
    Ok(())
}
