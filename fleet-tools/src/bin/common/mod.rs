pub(crate) mod cli;
pub(crate) mod motion;

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}
