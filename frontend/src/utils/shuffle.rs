/// Fisher-Yates with an injected index source. `pick(bound)` must return a
/// value in `0..bound`; out-of-range picks are clamped.
pub fn shuffle<T>(items: &mut [T], mut pick: impl FnMut(usize) -> usize) {
    for i in (1..items.len()).rev() {
        let j = pick(i + 1).min(i);
        items.swap(i, j);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn random_index(bound: usize) -> usize {
    if bound == 0 {
        return 0;
    }
    (js_sys::Math::random() * bound as f64) as usize % bound
}

#[cfg(not(target_arch = "wasm32"))]
pub fn random_index(bound: usize) -> usize {
    use std::time::{SystemTime, UNIX_EPOCH};

    if bound == 0 {
        return 0;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(0);
    nanos as usize % bound
}
