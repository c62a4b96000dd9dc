// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_number<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Criterion config with a flamegraph profiler (`--profile-time <secs>` to record).
///
/// Frames are cheap, so the defaults favour many short samples.
pub fn criterion() -> Criterion {
    let frequency = env_number("AISLEMAP_PROFILE_FREQ", 250_i32).clamp(1, 1000);
    let sample_size = env_number("AISLEMAP_BENCH_SAMPLES", 100_usize).clamp(10, 500);
    let measurement_secs = env_number("AISLEMAP_BENCH_SECS", 3_u64).clamp(1, 60);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
