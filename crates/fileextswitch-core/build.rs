// Re-embed translations whenever a catalogue changes.
const CATALOGUES: &[&str] = &["en", "es"];

fn main() {
    println!("cargo:rerun-if-changed=locales");
    for locale in CATALOGUES {
        println!("cargo:rerun-if-changed=locales/{locale}.yml");
    }
}
