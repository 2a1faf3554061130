use std::env;
use std::f64::consts::TAU;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// (static name, samples per radian)
const TABLES: [(&str, f64); 5] = [
    ("COSTABLE_1", 1.0),
    ("COSTABLE_0_1", 10.0),
    ("COSTABLE_0_01", 100.0),
    ("COSTABLE_0_001", 1000.0),
    ("COSTABLE_0_0001", 10000.0),
];

// One trailing sample past the last reduced angle keeps the LERP lookahead in bounds.
fn table_len(scale: f64) -> usize {
    (TAU * scale).ceil() as usize + 1
}

fn emit_table(out: &mut String, name: &str, scale: f64) {
    let len = table_len(scale);
    writeln!(out, "pub(crate) static {name}: [f64; {len}] = [").unwrap();
    for k in 0..len {
        let value = (k as f64 / scale).cos();
        writeln!(out, "    {value:?},").unwrap();
    }
    out.push_str("];\n\n");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut out = String::new();
    out.push_str("// @generated by build.rs: cos(k / scale) sampled over [0, 2pi].\n\n");
    for (name, scale) in TABLES {
        emit_table(&mut out, name, scale);
    }

    let dest = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR")).join("costable.rs");
    fs::write(&dest, out).expect("write costable.rs");
}
