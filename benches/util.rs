use std::env;

use once_cell::sync::OnceCell;

use regex::Regex;

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id_2) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id_2);
            }

            affinity_already_set.set(true);
        }
    });
}

/// Benchmark names can be filtered with the CUSTOM_BENCH_REGEX env var, without it everything
/// runs.
pub fn should_run_benchmark(name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    let filter_regex = FILTER_REGEX.get_or_init(|| {
        env::var("CUSTOM_BENCH_REGEX")
            .ok()
            .map(|filter_regex| Regex::new(&filter_regex).unwrap())
    });

    filter_regex
        .as_ref()
        .map(|reg| reg.is_match(name))
        .unwrap_or(true)
}
