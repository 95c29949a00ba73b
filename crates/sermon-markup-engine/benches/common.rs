// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_sermon(sections: usize) -> String {
    let base = "## Section\n### Text\n\n> Quoted scripture with *emphasis*.\n\nA paragraph with **bold**, ==highlight== and *italic* words.\n1. First point\n2. Second **point**\n- Application\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_dense_markers(len: usize) -> String {
    "**a ==b *c ".repeat(len)
}
