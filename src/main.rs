// Release builds run without a console window.
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(target_os = "windows")]
mod windows_main;

#[cfg(target_os = "windows")]
fn main() {
    windows_main::run();
}

#[cfg(not(target_os = "windows"))]
fn main() {
    let _log = layerpin::logging::init(false, None);
    tracing::error!("LayerPin relies on the Win32 topmost window style and only runs on Windows");
    std::process::exit(1);
}
