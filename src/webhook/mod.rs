mod client;

pub use client::{HttpWebhookClient, WebhookClient, WebhookPayload};
