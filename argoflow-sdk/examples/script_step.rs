//! Builds the pieces of a script step from a plain function.
//!
//! Run with: cargo run --example script_step

use argoflow_sdk::{gpu_requested, unique_step_name, workflow_script, InvocationStack};

#[workflow_script]
#[allow(dead_code)]
fn train_model() {
    println!("training...");
}

fn main() -> anyhow::Result<()> {
    let mut calls = InvocationStack::new();
    calls.enter("main");

    let resources: serde_yaml::Value = serde_yaml::from_str("cpu: 2\nmemory: 4Gi\ngpu: 1")?;

    let (step, location) = calls.invocation_location()?;
    println!("step `{}` defined at {}", step, location);
    println!("workflow file: {}", calls.workflow_filename()?);
    println!("unique step name: {}", unique_step_name(&step));
    println!("gpu requested: {}", gpu_requested(Some(&resources))?);

    TRAIN_MODEL_SCRIPT.print_metadata();
    println!("encoded body: {}", TRAIN_MODEL_SCRIPT.encoded_body());

    Ok(())
}
