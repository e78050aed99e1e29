use brickfield::{Field, Vec2};
use std::time::Instant;

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let mut width = 40.0f64;
    let mut height = 40.0f64;
    let mut iters = 2000usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--width=") { if let Ok(v)=val.parse() { width=v; } }
        else if let Some(val)=a.strip_prefix("--height=") { if let Ok(v)=val.parse() { height=v; } }
        else if let Some(val)=a.strip_prefix("--iters=") { if let Ok(v)=val.parse() { iters=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let mut field = match Field::new(width, height) {
        Ok(f) => f,
        Err(e) => { eprintln!("FAIL: {}", e); std::process::exit(2); }
    };

    // Drag the second handle around a spiral and re-classify every step
    let mut times_ms: Vec<f64> = Vec::with_capacity(iters);
    let start_all = Instant::now();
    let mut contained = 0usize;
    for k in 0..iters {
        let t = k as f64 * 0.05;
        let r = (k % 200) as f64 * 0.05 * width.min(height) / 20.0;
        let b = Vec2::new(r * t.cos(), r * t.sin());
        let t0 = Instant::now();
        if field.set_control_points(Vec2::new(0.0, 0.0), b).is_err() { continue; }
        contained += field.tally().contained;
        let dt = t0.elapsed().as_secs_f64() * 1000.0;
        times_ms.push(dt);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("tiles={} iters={} contained_sum={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", field.tile_count(), iters, contained, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
