use std::{env, fmt::Write as _, fs::File, io::BufWriter, io::Write as _, path::Path};

use handrank_codegen::cactus;

/// Writes a fixed-size unsigned-integer array as a Rust `static` item.
fn write_table(out: &mut impl Write, name: &str, ty: &str, values: &[u16]) {
    let mut body = String::with_capacity(values.len() * 6);
    for v in values {
        write!(&mut body, "{v},").unwrap();
    }
    writeln!(
        out,
        "pub static {name}: [{ty}; {}] = [{body}];\n",
        values.len()
    )
    .unwrap();
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let tables = cactus::generate();

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("cactus_tables.rs");
    let mut file = BufWriter::new(File::create(path).unwrap());

    write_table(&mut file, "FLUSHES", "u16", &tables.flushes);
    write_table(&mut file, "UNIQUE5", "u16", &tables.unique5);
    write_table(&mut file, "HASH_ADJUST", "u16", &tables.hash_adjust);
    write_table(&mut file, "HASH_VALUES", "u16", &tables.hash_values);
}
