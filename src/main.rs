// This binary crate is intentionally minimal.
// All inference logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example forward
fn main() {
    println!("fcnet: forward inference for fully-connected sigmoid networks.");
    println!("Run `cargo run --example forward` to see the XOR demo.");
}
