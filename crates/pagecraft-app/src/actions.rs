//! Action execution - spawns background tasks
//!
//! Bridges the synchronous update loop to async work: every [`Task`]
//! runs on its own tokio task and reports back over the message channel.
//! Failures become `*Failed` messages, never panics.

use std::sync::Arc;

use pagecraft_core::prelude::*;
use pagecraft_genai::Generator;
use tokio::sync::mpsc;

use crate::export;
use crate::handler::{Task, UpdateAction};
use crate::image;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<G>(action: UpdateAction, generator: Arc<G>, msg_tx: mpsc::Sender<Message>)
where
    G: Generator + Send + Sync + 'static,
{
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, generator, msg_tx).await;
            });
        }
    }
}

async fn execute_task<G>(task: Task, generator: Arc<G>, msg_tx: mpsc::Sender<Message>)
where
    G: Generator + Send + Sync,
{
    let msg = match task {
        Task::GenerateSection { section_type, info } => {
            debug!(kind = section_type.name(), "Generating section copy");
            match generator.generate_copy(&info, section_type).await {
                Ok(copy) => Message::SectionGenerated { section_type, copy },
                Err(e) => Message::SectionGenerationFailed {
                    section_type,
                    reason: e.to_string(),
                },
            }
        }

        Task::RegenerateCopy {
            id,
            section_type,
            info,
        } => match generator.generate_copy(&info, section_type).await {
            Ok(copy) => Message::CopyRegenerated { id, copy },
            Err(e) => Message::CopyRegenerationFailed {
                id,
                reason: e.to_string(),
            },
        },

        Task::LoadImage { id, path } => match image::load_png_data_url(&path) {
            Ok(data_url) => Message::ImageAttached { id, data_url },
            Err(e) => Message::ImageAttachFailed {
                id,
                reason: e.to_string(),
            },
        },

        Task::CompositeImage {
            id,
            product_png_b64,
        } => match generator.composite_image(&product_png_b64, None).await {
            Ok(data_url) => Message::ImageComposited { id, data_url },
            Err(e) => Message::ImageCompositeFailed {
                id,
                reason: e.to_string(),
            },
        },

        Task::ExportPage {
            project_dir,
            filename,
            info,
            sections,
        } => match export::export_page(&project_dir, &filename, &info, &sections) {
            Ok(path) => Message::ExportCompleted(path),
            Err(e) => Message::ExportFailed(e.to_string()),
        },
    };

    // Receiver gone means the app is shutting down
    let _ = msg_tx.send(msg).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::{ProjectInfo, SectionCopy, SectionType};
    use pagecraft_genai::test_utils::StubGenerator;
    use pagecraft_genai::GenAiError;

    fn setup() -> (Arc<StubGenerator>, mpsc::Sender<Message>, mpsc::Receiver<Message>) {
        let (tx, rx) = mpsc::channel(8);
        (Arc::new(StubGenerator::new()), tx, rx)
    }

    #[tokio::test]
    async fn test_generate_section_success_sends_generated() {
        let (stub, tx, mut rx) = setup();
        stub.push_copy(Ok(SectionCopy {
            title: "T".to_string(),
            content: "C".to_string(),
        }));

        handle_action(
            UpdateAction::SpawnTask(Task::GenerateSection {
                section_type: SectionType::Hero,
                info: ProjectInfo::default(),
            }),
            stub,
            tx,
        );

        let msg = rx.recv().await.unwrap();
        assert!(matches!(
            msg,
            Message::SectionGenerated {
                section_type: SectionType::Hero,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_generate_section_failure_sends_failed() {
        let (stub, tx, mut rx) = setup();
        stub.push_copy(Err(GenAiError::malformed("bad json")));

        handle_action(
            UpdateAction::SpawnTask(Task::GenerateSection {
                section_type: SectionType::Cta,
                info: ProjectInfo::default(),
            }),
            stub,
            tx,
        );

        match rx.recv().await.unwrap() {
            Message::SectionGenerationFailed {
                section_type,
                reason,
            } => {
                assert_eq!(section_type, SectionType::Cta);
                assert!(reason.contains("bad json"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_regenerate_reports_by_id() {
        let (stub, tx, mut rx) = setup();
        stub.push_copy(Ok(SectionCopy {
            title: "New".to_string(),
            content: "Copy".to_string(),
        }));
        let id = pagecraft_core::SectionId::new();

        handle_action(
            UpdateAction::SpawnTask(Task::RegenerateCopy {
                id,
                section_type: SectionType::Review,
                info: ProjectInfo::default(),
            }),
            stub,
            tx,
        );

        match rx.recv().await.unwrap() {
            Message::CopyRegenerated { id: got, copy } => {
                assert_eq!(got, id);
                assert_eq!(copy.title, "New");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_image_missing_file_sends_attach_failed() {
        let (stub, tx, mut rx) = setup();
        let id = pagecraft_core::SectionId::new();

        handle_action(
            UpdateAction::SpawnTask(Task::LoadImage {
                id,
                path: "/nonexistent/product.png".into(),
            }),
            stub,
            tx,
        );

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::ImageAttachFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_export_page_sends_completed_with_path() {
        let (stub, tx, mut rx) = setup();
        let temp = tempfile::tempdir().unwrap();

        handle_action(
            UpdateAction::SpawnTask(Task::ExportPage {
                project_dir: temp.path().to_path_buf(),
                filename: "page.html".to_string(),
                info: ProjectInfo::default(),
                sections: vec![],
            }),
            stub,
            tx,
        );

        match rx.recv().await.unwrap() {
            Message::ExportCompleted(path) => assert!(path.ends_with("page.html")),
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
