#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod behaviors;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;

#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), backend::ServerError> {
    backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
