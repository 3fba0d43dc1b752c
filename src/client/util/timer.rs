/// Resolves after `ms` milliseconds on the browser event loop.
#[cfg(feature = "web")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Without the browser renderer there is no event loop to wake the task, it never resolves.
#[cfg(not(feature = "web"))]
pub async fn sleep_ms(_ms: u32) {
    std::future::pending::<()>().await;
}
