// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok())
}

/// Criterion config shared by all benches.
///
/// The registry and search benches are sub-millisecond, so the defaults are shorter than
/// criterion's. A flamegraph is only recorded when `PROFILE_FREQ` is set.
pub fn criterion() -> Criterion {
    let sample_size = env_parse::<usize>("BENCH_SAMPLE_SIZE").unwrap_or(50).clamp(10, 200);
    let warmup_secs = env_parse::<u64>("BENCH_WARMUP_SECS").unwrap_or(1).clamp(1, 60);
    let measurement_secs = env_parse::<u64>("BENCH_MEASUREMENT_SECS").unwrap_or(3).clamp(1, 120);

    let config = Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs));

    match env_parse::<i32>("PROFILE_FREQ") {
        Some(frequency) => config.with_profiler(PProfProfiler::new(
            frequency.clamp(1, 1000),
            Output::Flamegraph(None),
        )),
        None => config,
    }
}
