// src/bin/fuzz_fsa.rs
// Feed random identifier streams through the tables and a hash-set oracle, compare.
//   FUZZ_ITERS   rounds (default 20)
//   FUZZ_WORDS   words classified per round (default 50_000)
//   FUZZ_SEED    rng seed (default 42)
//   FUZZ_INPUT   replay: reserved words on line 1, scanned words after

use std::{fs, time::Instant};

use dynfsa::{
    dev::generator::{Oracle, gen_words},
    fsa::{Machine, Marker},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

/// Returns the index of the first disagreeing word, if any.
fn run_once(reserved: &[String], words: &[String]) -> Result<Option<usize>, dynfsa::Error> {
    let mut machine = Machine::new();
    for w in reserved {
        machine.insert(w, Marker::Reserved)?;
    }
    let mut oracle = Oracle::with_reserved(reserved.iter().map(String::as_str));

    for (i, w) in words.iter().enumerate() {
        let got = machine.classify(w)?;
        let want = oracle.classify(w);
        if got != want {
            eprintln!("[fuzz] #{i} {w:?}: tables={got:?} oracle={want:?}");
            return Ok(Some(i));
        }
    }
    Ok(None)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Ok(path) = std::env::var("FUZZ_INPUT") {
        eprintln!("[replay] reading {path}");
        let s = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("error: failed to read {path}: {e}");
            std::process::exit(1);
        });
        let mut lines = s.lines();
        let reserved: Vec<String> = lines
            .next()
            .unwrap_or("")
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let words: Vec<String> = lines
            .flat_map(str::split_whitespace)
            .map(str::to_string)
            .collect();
        match run_once(&reserved, &words) {
            Ok(None) => eprintln!("[replay] {} word(s) matched ✅", words.len()),
            Ok(Some(_)) => std::process::exit(1),
            Err(e) => {
                eprintln!("[replay] {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let iters = env_usize("FUZZ_ITERS", 20);
    let count = env_usize("FUZZ_WORDS", 50_000);
    let seed = env_u64("FUZZ_SEED", 42);
    eprintln!("[fuzz] iters={iters} words={count} seed={seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..iters {
        let n_reserved = rng.random_range(0..64);
        let reserved = gen_words(&mut rng, n_reserved, 8);
        let words = gen_words(&mut rng, count, 8);

        let t0 = Instant::now();
        match run_once(&reserved, &words) {
            Ok(None) => eprintln!(
                "[fuzz] iter {i}: {} reserved, {} words in {} ms -> OK",
                reserved.len(),
                words.len(),
                t0.elapsed().as_millis()
            ),
            Ok(Some(at)) => {
                eprintln!("[fuzz] iter {i}: MISMATCH at word {at}");
                eprintln!("[fuzz] reserved: {}", reserved.join(" "));
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("[fuzz] iter {i}: {e}");
                std::process::exit(1);
            }
        }
    }
    eprintln!("[fuzz] all iterations matched ✅");
}
