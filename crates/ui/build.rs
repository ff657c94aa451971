//! Compiles the Slint window definition.

#![allow(clippy::expect_used)]

fn main() {
    slint_build::compile("src/ui/main_window.slint").expect("failed to compile main_window.slint");
}
