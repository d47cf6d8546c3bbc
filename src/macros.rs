#[cfg(feature = "tracing")]
macro_rules! sstrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "smoothscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sstrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ssdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "smoothscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ssdebug {
    ($($tt:tt)*) => {};
}
