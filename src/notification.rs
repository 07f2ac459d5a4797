//! Operator notifications
//!
//! Conditions that do not abort an operator (a skipped duplicate, a point
//! that fell back to the object origin) are collected as [`Notification`]
//! items and returned with the operator's
//! [`CreationReport`](crate::operators::CreationReport).

use crate::types::ObjectId;
use std::fmt;

/// Category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A segment dimension was not created because one already exists
    DuplicateSkipped,
    /// No vertex was selected on an object; its origin was used instead
    OriginFallback,
    /// Any other non-fatal condition
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSkipped => write!(f, "DuplicateSkipped"),
            Self::OriginFallback => write!(f, "OriginFallback"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single notification produced by an operator
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Category
    pub notification_type: NotificationType,
    /// Object the notification concerns, if any
    pub object: Option<ObjectId>,
    /// Human-readable description
    pub message: String,
}

impl Notification {
    /// Create a new notification
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            object: None,
            message: message.into(),
        }
    }

    /// Builder: Attach the concerned object
    pub fn with_object(mut self, object: ObjectId) -> Self {
        self.object = Some(object);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object {
            Some(object) => write!(f, "[{}] {}: {}", self.notification_type, object, self.message),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Notifications collected while an operator runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Record a notification about an object
    pub fn notify(
        &mut self,
        notification_type: NotificationType,
        object: ObjectId,
        message: impl Into<String>,
    ) {
        self.items
            .push(Notification::new(notification_type, message).with_object(object));
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Notifications of one type
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
