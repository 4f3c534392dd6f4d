//! Sample entry point used as a search target

fn main() {
    println!("Hello from sample project!");
}
