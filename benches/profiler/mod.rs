// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr + Ord>(name: &str, default: T, min: T, max: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Criterion with a pprof flamegraph profiler attached (`--profile-time <secs>`).
///
/// Routes are cheap, so samples are many and runs are short by default.
pub fn criterion() -> Criterion {
    let frequency: i32 = env_or("PROFILE_FREQ", 997, 1, 5000);
    let sample_size: usize = env_or("BENCH_SAMPLE_SIZE", 100, 10, 500);
    let warmup_secs: u64 = env_or("BENCH_WARMUP_SECS", 1, 1, 60);
    let measurement_secs: u64 = env_or("BENCH_MEASUREMENT_SECS", 3, 1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
