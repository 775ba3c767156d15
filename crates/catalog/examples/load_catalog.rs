use catalog::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/restaurants.csv");

    println!("Loading restaurant catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_file(path).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Restaurants: {}", catalog.len());
    println!("Cuisines: {}", catalog.cuisine_index().len());
    for entry in catalog.cuisine_index().entries().iter().take(10) {
        println!("  {:>4}  {:<24} {}", entry.code, entry.label, entry.count);
    }
}
