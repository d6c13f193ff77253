//! Print every member of a polygon sequence with its efficiency.
//!
//! Usage:
//!   cargo run -p polygons --example efficiency_table -- 12 2.0
//!
//! Arguments default to `m = 10`, `R = 1.0`.

use polygons::PolygonSequence;

fn main() {
    let mut args = std::env::args().skip(1);
    let m = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let r = args.next().and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let seq = match PolygonSequence::new(m, r) {
        Ok(seq) => seq,
        Err(e) => {
            eprintln!("usage: efficiency_table [max_edges>=3] [radius>0] ({e})");
            return;
        }
    };
    println!("{seq}");
    for p in &seq {
        println!(
            "n={:>3} angle={:>8.3} side={:.6} area={:.6} perimeter={:.6} efficiency={:.6}",
            p.count_vertices(),
            p.interior_angle(),
            p.side_length(),
            p.area(),
            p.perimeter(),
            p.efficiency()
        );
    }
    println!("max efficiency: {}", seq.max_efficiency_polygon());
}
