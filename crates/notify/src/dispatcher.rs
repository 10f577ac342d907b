//! Per-recipient notification fan-out.
//!
//! One publish event produces, for every resolved recipient, an awaited
//! notification-record insert followed by a detached best-effort email.
//! There is no transaction spanning the fan-out and no retry: a recipient
//! whose insert fails is logged and skipped, a recipient whose email fails
//! still keeps their record, and neither outcome disturbs any other
//! recipient or the publish operation itself.

use std::sync::Arc;

use moim_core::content::{ContentKind, NotificationKind};
use moim_core::mentions::extract_mentions;
use moim_core::recipients::{resolve_recipients, RosterEntry};
use moim_core::types::DbId;
use moim_core::visibility::ReadPermission;
use moim_db::models::member::Member;
use moim_db::repositories::{MemberRepo, NotificationRepo};
use moim_db::DbPool;

use crate::email::Mailer;
use crate::templates;

// ---------------------------------------------------------------------------
// Publication
// ---------------------------------------------------------------------------

/// One publish event to fan out.
#[derive(Debug, Clone)]
pub struct Publication {
    pub kind: ContentKind,
    /// ID of the created content row, stored as the record's `related_id`.
    pub content_id: DbId,
    pub title: String,
    pub author_id: DbId,
    pub author_name: String,
    /// The item's read restriction; drives the department broadcast.
    pub permission: Option<ReadPermission>,
}

// ---------------------------------------------------------------------------
// NotificationDispatcher
// ---------------------------------------------------------------------------

/// Fans publish events out to notification records and emails.
pub struct NotificationDispatcher {
    pool: DbPool,
    /// `None` when SMTP is not configured; the email leg is then skipped.
    mailer: Option<Arc<dyn Mailer>>,
}

impl NotificationDispatcher {
    /// Create a dispatcher over the given pool and optional mail transport.
    pub fn new(pool: DbPool, mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self { pool, mailer }
    }

    /// Extract mentions from `content`, resolve recipients against the
    /// active roster, and dispatch to each of them.
    ///
    /// Never fails: every store or transport error is logged and isolated.
    /// When this returns, all notification records that could be written
    /// have been written; emails may still be in flight.
    pub async fn dispatch_publication(&self, publication: &Publication, content: &str) {
        let mentions = extract_mentions(content);

        let roster = match MemberRepo::list_active(&self.pool).await {
            Ok(roster) => roster,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    content_id = publication.content_id,
                    "Failed to load roster, skipping notification fan-out"
                );
                return;
            }
        };

        let entries: Vec<RosterEntry> = roster
            .iter()
            .map(|member| RosterEntry {
                member_id: member.id,
                department: member.department.clone(),
            })
            .collect();

        let targets = resolve_recipients(
            publication.author_id,
            publication.permission.as_ref(),
            &mentions,
            &entries,
        );
        if targets.is_empty() {
            return;
        }

        tracing::debug!(
            content_id = publication.content_id,
            mentioned = targets.mentioned.len(),
            department = targets.department.len(),
            "Dispatching publication notifications"
        );

        for member_id in &targets.mentioned {
            let member = roster.iter().find(|m| m.id == *member_id);
            self.notify(publication, *member_id, member, NotificationKind::Mention)
                .await;
        }

        let broadcast_kind = publication.kind.notification_kind();
        for member_id in &targets.department {
            // Department targets always come from the roster.
            let member = roster.iter().find(|m| m.id == *member_id);
            self.notify(publication, *member_id, member, broadcast_kind)
                .await;
        }
    }

    /// Run the (persist record, send email) pair for one recipient.
    ///
    /// The record insert is awaited; on failure the recipient is skipped
    /// entirely, including their email. The email is a detached task so the
    /// caller never waits on SMTP round-trips, and it is attempted at most
    /// once.
    async fn notify(
        &self,
        publication: &Publication,
        member_id: DbId,
        member: Option<&Member>,
        kind: NotificationKind,
    ) {
        let message = match kind {
            NotificationKind::Mention => {
                templates::mention_message(&publication.author_name, publication.kind)
            }
            _ => templates::broadcast_message(&publication.author_name, publication.kind),
        };

        let persisted = NotificationRepo::create(
            &self.pool,
            member_id,
            kind,
            &publication.title,
            &message,
            Some(publication.content_id),
        )
        .await;
        if let Err(e) = persisted {
            tracing::error!(
                error = %e,
                member_id,
                content_id = publication.content_id,
                "Failed to persist notification, skipping recipient"
            );
            return;
        }

        let Some(mailer) = &self.mailer else {
            return;
        };
        // A mentioned member outside the active roster keeps their record
        // but gets no email.
        let Some(member) = member else {
            return;
        };
        // Mentions always email; broadcasts honor the member's opt-in.
        let wants_email = match kind {
            NotificationKind::Mention => true,
            _ => member.email_opt_in,
        };
        let Some(to) = member.email.clone().filter(|_| wants_email) else {
            return;
        };

        let mailer = Arc::clone(mailer);
        let subject = templates::subject(&message);
        let body = templates::email_body(&publication.title, &publication.author_name, &message);
        tokio::spawn(async move {
            if let Err(e) = mailer.deliver(&to, &subject, &body).await {
                tracing::warn!(error = %e, member_id, "Notification email failed");
            }
        });
    }
}
