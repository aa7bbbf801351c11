//! Console stand-in for the two-button UI: starts a short timed run,
//! streams events as JSON lines to stdout, reports button enablement on
//! every gate recheck, and presses cancel partway through.

use std::sync::Arc;
use std::time::Duration;

use taskgate::runtime::prelude::{
    JsonLineEventSink,
    RunConfig,
    TaskController,
    TaskResult,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> TaskResult<()> {
    let sink = Arc::new(JsonLineEventSink::new(std::io::stdout()));
    let controller = TaskController::new(
        RunConfig::new()
            .with_steps(5)
            .with_step_delay(Duration::from_millis(200)),
    )
    .with_sink(sink);

    let gate = controller.gate();
    gate.subscribe(Arc::new({
        let gate = gate.clone();
        move || {
            eprintln!(
                "start enabled: {}, cancel enabled: {}",
                gate.can_start(),
                gate.can_cancel(),
            );
        }
    }));

    let canceller = controller.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(700)).await;
        let _ = canceller.request_cancel();
    });

    let outcome = controller.start().await?;
    eprintln!("outcome: {:?}", outcome);
    eprintln!("final message: {}", controller.progress_message());
    Ok(())
}
