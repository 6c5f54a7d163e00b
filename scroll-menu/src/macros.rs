#[cfg(feature = "tracing")]
macro_rules! smtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scroll_menu", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! smtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! smdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scroll_menu", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! smdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! smwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scroll_menu", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! smwarn {
    ($($tt:tt)*) => {};
}
