//! Print a fresh random hex token.

fn main() {
    let token = storefront_core::token::random_hex();
    println!("Generated 32-character hex string: {token}");
}
