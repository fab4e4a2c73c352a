//! Example: switch the torch on, sweep the brightness, switch it off.
//!
//! Run with: `cargo run --example cycle_torch`

use dimmer_core::{Capability, DimmerError, DimmerPanel, TorchOutcome};

fn report(outcome: Option<TorchOutcome>) {
    match outcome {
        Some(TorchOutcome::Simulated(line)) => println!("{}", line),
        Some(TorchOutcome::Applied) => println!("Applied on hardware"),
        None => {}
    }
}

fn main() -> Result<(), DimmerError> {
    // Initialize logging (optional)
    env_logger::init();

    // Probe once, like the GUI does at startup
    let mut panel = DimmerPanel::new(Capability::probe());
    println!("Hardware available: {}", panel.hardware_available());

    report(Some(panel.toggle()?));

    for percent in [25.0, 75.0, 100.0, 0.0] {
        report(panel.slider_moved(percent)?);
        let scene = panel.bar_scene();
        println!(
            "Bar: {} of {}px lit, label {:?}",
            scene.fill.map(|f| f.width).unwrap_or(0),
            scene.geometry.width,
            scene.label.text
        );
    }

    report(Some(panel.toggle()?));

    Ok(())
}
