//! Background work spawned by the App.
//!
//! Tasks never touch App state; they only send an [`AppMessage`] back.

use std::future::Future;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::{App, AppMessage, NoticeKind};
use crate::modals::{call_helpline, PendingReply};
use crate::models::api::CreatePostRequest;

impl App {
    fn spawn_message<F>(&self, task: F) -> JoinHandle<()>
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = task.await;
            // Receiver gone means the loop has exited
            let _ = tx.send(msg);
        })
    }

    pub(super) fn load_posts(&mut self) {
        let generation = self.community.load.begin();
        let backend = self.backend.clone();
        self.spawn_message(async move {
            AppMessage::PostsLoaded {
                generation,
                result: backend.fetch_posts().await,
            }
        });
    }

    pub(super) fn load_resources(&mut self) {
        let generation = self.library.load.begin();
        let backend = self.backend.clone();
        self.spawn_message(async move {
            AppMessage::ResourcesLoaded {
                generation,
                result: backend.fetch_resources().await,
            }
        });
    }

    pub(super) fn load_counsellors(&mut self) {
        let generation = self.directory.load.begin();
        let backend = self.backend.clone();
        self.spawn_message(async move {
            AppMessage::CounsellorsLoaded {
                generation,
                result: backend.fetch_counsellors().await,
            }
        });
    }

    pub(super) fn schedule_reply(&mut self, pending: PendingReply) {
        let delay = self.chat_reply_delay;
        let handle = self.spawn_message(async move {
            tokio::time::sleep(delay).await;
            AppMessage::ChatReplyDue(pending)
        });
        self.chat_timers.push(handle);
    }

    pub(super) fn send_like(&self, post_id: String, liked: bool) {
        let backend = self.backend.clone();
        self.spawn_message(async move {
            match backend.like_post(&post_id).await {
                Ok(_) => AppMessage::LikeConfirmed { post_id },
                Err(error) => AppMessage::LikeFailed {
                    post_id,
                    liked,
                    error,
                },
            }
        });
    }

    pub(super) fn send_post(&self, post_id: String, request: CreatePostRequest) {
        let backend = self.backend.clone();
        self.spawn_message(async move {
            match backend.create_post(&request).await {
                Ok(_) => AppMessage::PostConfirmed { post_id },
                Err(error) => AppMessage::PostFailed {
                    post_id,
                    request,
                    error,
                },
            }
        });
    }

    pub(super) fn book_selected(&mut self) {
        let Some(counsellor) = self.directory.selected_counsellor() else {
            return;
        };
        let name = counsellor.name.clone();
        let request = match self.directory.book_session(&counsellor.id.clone()) {
            Ok(request) => request,
            Err(e) => {
                self.notify(e.user_message(), NoticeKind::Error);
                return;
            }
        };
        self.notify(format!("Requesting a session with {}", name), NoticeKind::Info);
        let backend = self.backend.clone();
        // Outcome is only logged
        tokio::spawn(async move {
            match backend.book_session(&request).await {
                Ok(ack) => {
                    info!(counsellor = %request.counsellor_id, success = ack.success, "session booking sent")
                }
                Err(e) => {
                    warn!(counsellor = %request.counsellor_id, error = %e, "session booking failed")
                }
            }
        });
    }

    pub(super) fn download_selected(&mut self) {
        let Some(resource) = self.library.selected_resource() else {
            return;
        };
        let title = resource.title.clone();
        let id = match self.library.download(&resource.id.clone()) {
            Ok(id) => id,
            Err(e) => {
                self.notify(e.user_message(), NoticeKind::Error);
                return;
            }
        };
        self.notify(format!("Downloading \"{}\"", title), NoticeKind::Info);
        let backend = self.backend.clone();
        tokio::spawn(async move {
            match backend.download_resource(&id).await {
                Ok(bytes) => info!(resource = %id, bytes, "resource downloaded"),
                Err(e) => warn!(resource = %id, error = %e, "resource download failed"),
            }
        });
    }

    /// Dial, with the backend log in the background; see [`call_helpline`]
    pub(super) fn place_call(&mut self, phone: String) {
        self.notify(format!("Calling {}…", phone), NoticeKind::Info);
        let backend = self.backend.clone();
        let dialer = self.dialer.clone();
        self.spawn_message(async move {
            AppMessage::CallPlaced(call_helpline(backend, dialer.as_ref(), &phone))
        });
    }

    pub(super) fn start_crisis_chat(&mut self) {
        info!("crisis chat requested");
        self.notify("Connecting you to crisis chat support…", NoticeKind::Info);
        let backend = self.backend.clone();
        self.spawn_message(async move {
            match backend.start_crisis_chat().await {
                Ok(_) => AppMessage::Notice("Crisis chat requested. Someone will be with you shortly.".to_string()),
                Err(e) => {
                    warn!(error = %e, "crisis chat request failed");
                    AppMessage::Notice(
                        "Crisis chat is unavailable right now. Call or text 988 for immediate help."
                            .to_string(),
                    )
                }
            }
        });
    }
}
