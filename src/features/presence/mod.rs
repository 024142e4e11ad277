//! # Feature: Voice Presence Announcements
//!
//! Posts a notice to a text channel whenever a member joins or leaves one of the
//! watched voice channels. Nothing is remembered between events: each voice state
//! update is judged only by comparing its before/after channels.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: true (unset `ANNOUNCE_CHANNEL_ID` to disable)
//!
//! ## Changelog
//! - 1.0.0: Initial release with join/leave notices for watched channels

use anyhow::Result;
use log::{debug, info};
use serenity::model::channel::ChannelType;
use serenity::model::id::{ChannelId, UserId};
use serenity::model::mention::Mentionable;
use serenity::model::voice::VoiceState;
use serenity::prelude::Context;
use std::collections::HashSet;

/// Voice channels whose membership changes are announced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchedChannels(HashSet<ChannelId>);

impl WatchedChannels {
    pub fn contains(&self, channel_id: ChannelId) -> bool {
        self.0.contains(&channel_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ChannelId> for WatchedChannels {
    fn from_iter<I: IntoIterator<Item = ChannelId>>(iter: I) -> Self {
        WatchedChannels(iter.into_iter().collect())
    }
}

/// One member's voice channel before and after a voice state update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceTransition {
    pub user_id: UserId,
    pub before: Option<ChannelId>,
    pub after: Option<ChannelId>,
}

impl VoiceTransition {
    pub fn from_states(old: Option<&VoiceState>, new: &VoiceState) -> Self {
        VoiceTransition {
            user_id: new.user_id,
            before: old.and_then(|state| state.channel_id),
            after: new.channel_id,
        }
    }

    pub fn is_channel_change(&self) -> bool {
        self.before != self.after
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    Left(ChannelId),
    Joined(ChannelId),
}

impl Announcement {
    pub fn channel_id(&self) -> ChannelId {
        match self {
            Announcement::Left(id) | Announcement::Joined(id) => *id,
        }
    }

    pub fn render(&self, channel_name: &str, username: &str) -> String {
        match self {
            Announcement::Left(_) => {
                format!("**{channel_name}** から、__{username}__  が退室しました")
            }
            Announcement::Joined(_) => {
                format!("**{channel_name}** に、__{username}__  が入室しました！")
            }
        }
    }
}

/// Decide which notices a transition produces
///
/// The leave and join checks are independent, so moving between two watched
/// channels yields `Left` followed by `Joined`.
pub fn plan_announcements(
    transition: &VoiceTransition,
    watched: &WatchedChannels,
) -> Vec<Announcement> {
    if !transition.is_channel_change() {
        return Vec::new();
    }

    let mut plan = Vec::with_capacity(2);
    if let Some(before) = transition.before.filter(|id| watched.contains(*id)) {
        plan.push(Announcement::Left(before));
    }
    if let Some(after) = transition.after.filter(|id| watched.contains(*id)) {
        plan.push(Announcement::Joined(after));
    }
    plan
}

/// Whether a channel can receive plain text messages
///
/// Voice and stage channels carry their own text chat.
pub fn is_text_capable(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::Text | ChannelType::News | ChannelType::Voice | ChannelType::Stage
    )
}

/// Where notices for one event go, decided from config and the cached channel kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceTarget {
    Post(ChannelId),
    Unset,
    NotCached(ChannelId),
    NotText(ChannelId, ChannelType),
}

pub fn announce_target(
    configured: Option<ChannelId>,
    cached_kind: Option<ChannelType>,
) -> AnnounceTarget {
    let Some(channel_id) = configured else {
        return AnnounceTarget::Unset;
    };
    match cached_kind {
        Some(kind) if is_text_capable(kind) => AnnounceTarget::Post(channel_id),
        Some(kind) => AnnounceTarget::NotText(channel_id, kind),
        None => AnnounceTarget::NotCached(channel_id),
    }
}

#[derive(Debug, Clone)]
pub struct PresenceAnnouncer {
    announce_channel_id: Option<ChannelId>,
    watched: WatchedChannels,
}

impl PresenceAnnouncer {
    pub fn new(announce_channel_id: Option<ChannelId>, watched: WatchedChannels) -> Self {
        PresenceAnnouncer {
            announce_channel_id,
            watched,
        }
    }

    /// Handle one voice state update, posting at most a leave and a join notice
    pub async fn handle_voice_state(
        &self,
        ctx: &Context,
        old: Option<&VoiceState>,
        new: &VoiceState,
    ) -> Result<()> {
        let transition = VoiceTransition::from_states(old, new);
        if !transition.is_channel_change() {
            return Ok(());
        }

        let Some(target) = self.resolve_target(ctx) else {
            return Ok(());
        };

        let plan = plan_announcements(&transition, &self.watched);
        if plan.is_empty() {
            return Ok(());
        }

        let username = member_name(ctx, old, new);
        for announcement in plan {
            let channel_id = announcement.channel_id();
            let channel_name = ctx
                .cache
                .guild_channel(channel_id)
                .map(|channel| channel.name)
                .unwrap_or_else(|| channel_id.mention().to_string());

            target
                .say(&ctx.http, announcement.render(&channel_name, &username))
                .await?;
            info!("🔊 {announcement:?} announced for {username}");
        }

        Ok(())
    }

    /// Cached announcement channel, if configured and able to hold text
    fn resolve_target(&self, ctx: &Context) -> Option<ChannelId> {
        let cached_kind = self
            .announce_channel_id
            .and_then(|id| ctx.cache.guild_channel(id))
            .map(|channel| channel.kind);

        match announce_target(self.announce_channel_id, cached_kind) {
            AnnounceTarget::Post(channel_id) => Some(channel_id),
            AnnounceTarget::Unset => None,
            AnnounceTarget::NotCached(channel_id) => {
                debug!("Announce channel {channel_id} not in cache, skipping");
                None
            }
            AnnounceTarget::NotText(channel_id, kind) => {
                debug!("Announce channel {channel_id} is {kind:?}, skipping");
                None
            }
        }
    }
}

fn member_name(ctx: &Context, old: Option<&VoiceState>, new: &VoiceState) -> String {
    new.member
        .as_ref()
        .or_else(|| old.and_then(|state| state.member.as_ref()))
        .map(|member| member.user.name.clone())
        .or_else(|| ctx.cache.user(new.user_id).map(|user| user.name))
        .unwrap_or_else(|| new.user_id.to_string())
}
