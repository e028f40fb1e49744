fn main() {
    // wasm-bindgen's `start` export in lib.rs boots the app; the bin target
    // exists for trunk and is inert elsewhere.
    #[cfg(target_arch = "wasm32")]
    shredlab_frontend::boot();
}
