//! Driver Demo
//!
//! Feeds the same key scripts through the bare engine and the TUI app and
//! prints what each one shows.
//!
//! Run with: cargo run --example driver_demo

use pocket_calc::driver::{run_all_scenarios, CalculatorDriver, EngineDriver, TuiDriver};

const SCRIPTS: &[&str] = &[
    "2+3*4 Enter",
    "10-4-3=",
    "5/0=",
    "0.1+0.2=",
    "7m Escape r",
    "5+3 Backspace Enter",
    "4s",
];

fn show<D: CalculatorDriver>(name: &str, driver: &mut D) {
    println!("{name}");
    for script in SCRIPTS {
        driver.reset();
        driver.press_keys(script);
        let pending = driver.pending().unwrap_or_default();
        println!("  {script:<22} => {:>20}  {pending}", driver.display());
    }
    println!();
}

fn main() {
    let mut engine = EngineDriver::new();
    let mut tui = TuiDriver::new();

    show("Engine", &mut engine);
    show("TUI", &mut tui);

    run_all_scenarios(&mut engine);
    run_all_scenarios(&mut tui);
    println!("All scenarios passed on both drivers");
}
