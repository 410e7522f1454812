use duplex_impose::{ImposeError, document_statistics, impose_document, load_pdf, save_to_bytes};
use lopdf::Document;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::{ImpositionSettings, PdfCommand, PdfUpdate, PrintingAdvisor, RequestId};

/// What the worker keeps between commands
#[derive(Default)]
struct WorkerState {
    /// Parsed source, shared with blocking imposition tasks
    source: Option<Arc<Document>>,
    /// Output of the latest completed imposition
    imposed: Option<Vec<u8>>,
    /// Command pulled off the queue while coalescing, run next
    pending: Option<PdfCommand>,
}

/// Start [`worker_task`] on the current runtime and return its channels
pub fn spawn_worker(
    advisor: Arc<dyn PrintingAdvisor>,
) -> (
    mpsc::UnboundedSender<PdfCommand>,
    mpsc::UnboundedReceiver<PdfUpdate>,
    JoinHandle<()>,
) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(worker_task(advisor, command_rx, update_tx));
    (command_tx, update_rx, handle)
}

/// Async worker task that processes PDF commands and sends updates.
///
/// Runs until every command sender is dropped.
pub async fn worker_task(
    advisor: Arc<dyn PrintingAdvisor>,
    mut command_rx: mpsc::UnboundedReceiver<PdfCommand>,
    update_tx: mpsc::UnboundedSender<PdfUpdate>,
) {
    let mut state = WorkerState::default();

    loop {
        let cmd = match state.pending.take() {
            Some(cmd) => cmd,
            None => match command_rx.recv().await {
                Some(cmd) => cmd,
                None => break,
            },
        };
        process_command(cmd, &mut state, advisor.as_ref(), &mut command_rx, &update_tx).await;
    }
    log::debug!("command channel closed, worker exiting");
}

async fn process_command(
    cmd: PdfCommand,
    state: &mut WorkerState,
    advisor: &dyn PrintingAdvisor,
    command_rx: &mut mpsc::UnboundedReceiver<PdfCommand>,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    match cmd {
        PdfCommand::ImposeLoad { input_path } => {
            handle_load(input_path, state, update_tx).await;
        }
        PdfCommand::ImposeProcess {
            mut request,
            mut settings,
        } => {
            // Skip over queued process commands up to the next other command,
            // keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let PdfCommand::ImposeProcess {
                    request: new_request,
                    settings: new_settings,
                } = next_cmd
                {
                    log::debug!(
                        "Discarding imposition request {:?}, using newer {:?}",
                        request,
                        new_request
                    );
                    request = new_request;
                    settings = new_settings;
                } else {
                    state.pending = Some(next_cmd);
                    break;
                }
            }

            handle_process(request, settings, state, update_tx).await;
        }
        PdfCommand::ImposeSave { output_path } => {
            handle_save(output_path, state, update_tx).await;
        }
        PdfCommand::ImposeCalculateStats => match &state.source {
            Some(source) => {
                let stats = document_statistics(source);
                let _ = update_tx.send(PdfUpdate::ImposeStatsCalculated { stats });
            }
            None => send_error(update_tx, "No document loaded"),
        },
        PdfCommand::Advise {
            query,
            context,
            settings,
        } => {
            match advisor.advise(&query, &context, &settings).await {
                Ok(text) => {
                    let _ = update_tx.send(PdfUpdate::AdviceReady { text });
                }
                Err(e) => {
                    log::warn!("printing advice failed: {}", e);
                    send_error(update_tx, e.user_message());
                }
            }
        }
    }
}

async fn handle_load(
    input_path: PathBuf,
    state: &mut WorkerState,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    match load_pdf(&input_path).await {
        Ok(doc) => {
            let page_count = doc.get_pages().len();
            log::info!("loaded {} ({} pages)", input_path.display(), page_count);
            state.source = Some(Arc::new(doc));
            state.imposed = None;
            let _ = update_tx.send(PdfUpdate::ImposeLoaded { page_count });
        }
        Err(e) => {
            log::warn!("failed to load {}: {}", input_path.display(), e);
            send_error(update_tx, describe(&e, "Failed to load PDF"));
        }
    }
}

async fn handle_process(
    request: RequestId,
    settings: ImpositionSettings,
    state: &mut WorkerState,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    let Some(source) = state.source.clone() else {
        send_error(update_tx, "No document loaded");
        return;
    };

    let result = tokio::task::spawn_blocking(move || -> duplex_impose::Result<(Vec<u8>, usize)> {
        let mut output = impose_document(&source, &settings)?;
        let sheet_count = output.get_pages().len();
        Ok((save_to_bytes(&mut output)?, sheet_count))
    })
    .await
    .map_err(ImposeError::from)
    .and_then(|inner| inner);

    match result {
        Ok((pdf_bytes, sheet_count)) => {
            log::debug!("request {:?} produced {} sheets", request, sheet_count);
            state.imposed = Some(pdf_bytes.clone());
            let _ = update_tx.send(PdfUpdate::ImposeComplete {
                request,
                pdf_bytes,
                sheet_count,
            });
        }
        Err(e) => send_error(update_tx, describe(&e, "Failed to impose")),
    }
}

async fn handle_save(
    output_path: PathBuf,
    state: &WorkerState,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    let Some(bytes) = &state.imposed else {
        send_error(update_tx, "Nothing to save yet");
        return;
    };

    match tokio::fs::write(&output_path, bytes).await {
        Ok(()) => {
            let _ = update_tx.send(PdfUpdate::ImposeSaved { path: output_path });
        }
        Err(e) => send_error(
            update_tx,
            format!("Failed to save {}: {}", output_path.display(), e),
        ),
    }
}

fn describe(err: &ImposeError, context: &str) -> String {
    if err.is_load_error() {
        err.user_message()
    } else {
        format!("{}: {}", context, err)
    }
}

fn send_error(update_tx: &mpsc::UnboundedSender<PdfUpdate>, message: impl Into<String>) {
    let _ = update_tx.send(PdfUpdate::Error {
        message: message.into(),
    });
}
