fn main() {
    built::write_built_file().expect("Failed to gather build-time information");
}
