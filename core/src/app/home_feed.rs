//! Home feed controller
//!
//! Owns the home screen's transient view state and drives the data fetches
//! behind it: the signed-in user's profile and avatar, their friend strip,
//! and a paginated feed of posts. The rendering layer reads state through
//! `snapshot()` and feeds UI events back in as the `on_*` operations.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::config::ScreenConfig;
use crate::domain::entities::{Friend, Post, PostId, UserId, Viewer};
use crate::domain::ports::{
    FeedProvider, FriendProvider, PhotoProvider, ProfileProvider, SessionStore,
};

/// The friend strip scrolls only when more than this many friends are loaded
pub const FRIEND_STRIP_SCROLL_THRESHOLD: usize = 4;

/// Scroll geometry reported by the presentation layer on each scroll event
#[derive(Debug, Clone, Copy)]
pub struct ScrollMetrics {
    /// Height of the visible scroll viewport
    pub viewport_height: f64,
    /// Current scroll offset from the top of the content
    pub offset_y: f64,
    /// Total height of the scrollable content
    pub content_height: f64,
}

impl ScrollMetrics {
    /// True when the viewport bottom is within `threshold` layout units of
    /// the end of the content
    pub fn near_end(&self, threshold: f64) -> bool {
        self.viewport_height + self.offset_y >= self.content_height - threshold
    }
}

/// Owned presentation state handed to the rendering layer.
///
/// Serialized with camelCase keys to match the host app's bridge naming.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeedSnapshot {
    /// Header identity, present once the profile has loaded
    pub viewer: Option<Viewer>,
    pub friends: Vec<Friend>,
    pub posts: Vec<Post>,
    pub is_refreshing: bool,
    pub is_pagination_loading: bool,
    pub is_comment_panel_open: bool,
    /// Post the comment panel was opened for
    pub comment_post: Option<PostId>,
    /// True once a pagination fetch came back empty; cleared by refresh
    pub feed_exhausted: bool,
    pub profile_error: Option<String>,
    pub friends_error: Option<String>,
    pub feed_error: Option<String>,
    /// True when there are enough friends for the strip to scroll
    pub friend_strip_scrollable: bool,
}

/// Mutable view state behind the controller's lock
#[derive(Debug, Default)]
struct ScreenState {
    viewer: Option<Viewer>,
    friends: Vec<Friend>,
    posts: Vec<Post>,
    is_refreshing: bool,
    is_pagination_loading: bool,
    is_comment_panel_open: bool,
    comment_post: Option<PostId>,
    feed_exhausted: bool,
    profile_error: Option<String>,
    friends_error: Option<String>,
    feed_error: Option<String>,
    mounted: bool,
    /// Bumped on unmount. Fetches capture the generation they started under
    /// and results from an older generation are dropped on arrival.
    generation: u64,
}

impl ScreenState {
    /// Whether a result fetched under `generation` may still be applied
    fn accepts(&self, generation: u64) -> bool {
        self.mounted && self.generation == generation
    }
}

/// View-state controller for the home screen.
///
/// Generic over its provider ports so tests can drive it with in-memory
/// implementations. All operations take `&self` and never panic; provider
/// failures are surfaced through per-slice error slots in the snapshot
/// rather than returned. The embedder calls `on_mount()` when the screen
/// enters the tree, the other `on_*` operations as UI events arrive, and
/// `on_unmount()` when it leaves.
pub struct HomeFeedController<PR, PH, FR, FE, SS>
where
    PR: ProfileProvider,
    PH: PhotoProvider,
    FR: FriendProvider,
    FE: FeedProvider,
    SS: SessionStore,
{
    profiles: Arc<PR>,
    photos: Arc<PH>,
    friends: Arc<FR>,
    feed: Arc<FE>,
    session: Arc<SS>,
    config: ScreenConfig,
    state: RwLock<ScreenState>,
}

impl<PR, PH, FR, FE, SS> HomeFeedController<PR, PH, FR, FE, SS>
where
    PR: ProfileProvider,
    PH: PhotoProvider,
    FR: FriendProvider,
    FE: FeedProvider,
    SS: SessionStore,
{
    pub fn new(
        profiles: Arc<PR>,
        photos: Arc<PH>,
        friends: Arc<FR>,
        feed: Arc<FE>,
        session: Arc<SS>,
        config: ScreenConfig,
    ) -> Self {
        Self {
            profiles,
            photos,
            friends,
            feed,
            session,
            config,
            state: RwLock::new(ScreenState::default()),
        }
    }

    /// First mount of the screen: loads the friend strip and the first feed
    /// page concurrently. Calling again while mounted is a no-op; after an
    /// unmount the next call re-mounts with a fresh load.
    pub async fn on_mount(&self) {
        let generation = {
            let mut state = self.state.write().await;
            if state.mounted {
                tracing::debug!("Ignoring mount, screen already mounted");
                return;
            }
            state.mounted = true;
            state.generation
        };

        tracing::info!("Home feed mounted");

        tokio::join!(
            self.load_friends(generation),
            self.load_first_feed_page(generation)
        );
    }

    /// Runs on every focus of the screen: loads the signed-in user's profile
    /// and resolves their avatar photo.
    ///
    /// The identifier is read from the session store at call time. A missing
    /// identifier or a missing profile is a silent skip; a failed profile
    /// fetch is surfaced as `profile_error`, which clears as soon as the
    /// next attempt starts. Avatar trouble of any kind leaves the name and
    /// id applied and the avatar unset.
    pub async fn on_screen_focus(&self) {
        let Some(user_id) = self.viewer_id() else {
            tracing::debug!("Skipping profile load, no signed-in user");
            return;
        };

        let generation = {
            let mut state = self.state.write().await;
            state.profile_error = None;
            state.generation
        };

        let profile = match self.profiles.get_profile(&user_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::debug!(user_id = %user_id, "No profile found");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch profile");
                let mut state = self.state.write().await;
                if state.accepts(generation) {
                    state.profile_error = Some(e.to_string());
                }
                return;
            }
        };

        let photo_id = {
            let mut state = self.state.write().await;
            if !state.accepts(generation) {
                tracing::debug!("Dropping profile result, screen is gone");
                return;
            }
            state.viewer = Some(Viewer::from_profile(&profile));
            state.profile_error = None;
            profile.photo_id
        };

        let Some(photo_id) = photo_id else {
            return;
        };

        match self.photos.get_photo_by_id(&photo_id).await {
            Ok(Some(image)) => {
                let mut state = self.state.write().await;
                if !state.accepts(generation) {
                    return;
                }
                if let Some(viewer) = state.viewer.as_mut() {
                    viewer.avatar_image = Some(image);
                }
            }
            Ok(None) => {
                tracing::debug!(photo_id = %photo_id, "Profile photo not found");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch profile photo");
            }
        }
    }

    /// Pull-to-refresh: re-fetches the friend strip and the first feed page
    /// concurrently and replaces both wholesale. A second call while one is
    /// in flight is a no-op, as is a call while a feed page load is running:
    /// the feed runs one fetch cycle at a time. The refresh indicator clears
    /// when both fetches have settled.
    pub async fn refresh(&self) {
        let generation = {
            let mut state = self.state.write().await;
            if !state.mounted {
                tracing::debug!("Ignoring refresh, screen not mounted");
                return;
            }
            if state.is_refreshing {
                tracing::debug!("Ignoring refresh, one already in flight");
                return;
            }
            if state.is_pagination_loading {
                tracing::debug!("Ignoring refresh, page load in flight");
                return;
            }
            state.is_refreshing = true;
            state.friends_error = None;
            state.feed_error = None;
            state.generation
        };

        tracing::info!("Refreshing home feed");

        tokio::join!(
            self.load_friends(generation),
            self.load_first_feed_page(generation)
        );

        let mut state = self.state.write().await;
        if state.accepts(generation) {
            state.is_refreshing = false;
        }
    }

    /// Scroll event from the feed list. When the viewport is near the end of
    /// the content and no page load or refresh is already running, fetches
    /// the page after the last loaded post and appends it.
    ///
    /// An empty page marks the feed exhausted; later near-end scrolls are
    /// no-ops until a refresh re-arms pagination. With no posts loaded yet
    /// there is no cursor to page from, so the event is ignored.
    pub async fn on_scroll(&self, metrics: ScrollMetrics) {
        if !metrics.near_end(self.config.near_end_threshold) {
            return;
        }

        let (generation, cursor) = {
            let mut state = self.state.write().await;
            if !state.mounted {
                tracing::debug!("Ignoring scroll, screen not mounted");
                return;
            }
            if state.is_pagination_loading {
                tracing::debug!("Ignoring near-end scroll, page load already in flight");
                return;
            }
            if state.is_refreshing {
                tracing::debug!("Ignoring near-end scroll, refresh in flight");
                return;
            }
            if state.feed_exhausted {
                tracing::debug!("Ignoring near-end scroll, feed is exhausted");
                return;
            }
            let Some(last) = state.posts.last() else {
                tracing::debug!("Ignoring near-end scroll, no posts loaded yet");
                return;
            };
            let cursor = last.id.clone();
            state.is_pagination_loading = true;
            state.feed_error = None;
            (state.generation, cursor)
        };

        tracing::debug!(after = %cursor, "Loading next feed page");

        match self.feed.get_newsfeed_posts(Some(&cursor)).await {
            Ok(page) => {
                let mut state = self.state.write().await;
                if !state.accepts(generation) {
                    tracing::debug!("Dropping feed page, screen is gone");
                    return;
                }
                if page.is_empty() {
                    tracing::debug!(after = %cursor, "Feed exhausted");
                    state.feed_exhausted = true;
                } else {
                    state.posts.extend(page);
                }
                state.is_pagination_loading = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch next feed page");
                let mut state = self.state.write().await;
                if !state.accepts(generation) {
                    return;
                }
                state.feed_error = Some(e.to_string());
                state.is_pagination_loading = false;
            }
        }
    }

    /// Opens the comment panel for a post. Panel events are ignored while
    /// the screen is unmounted.
    pub async fn open_comment_panel(&self, post_id: PostId) {
        let mut state = self.state.write().await;
        if !state.mounted {
            tracing::debug!("Ignoring comment panel open, screen not mounted");
            return;
        }
        state.is_comment_panel_open = true;
        state.comment_post = Some(post_id);
    }

    /// Closes the comment panel (a tap on the list header does this)
    pub async fn close_comment_panel(&self) {
        let mut state = self.state.write().await;
        if !state.mounted {
            tracing::debug!("Ignoring comment panel close, screen not mounted");
            return;
        }
        state.is_comment_panel_open = false;
        state.comment_post = None;
    }

    /// Position change reported by the panel widget. Index -1 means the
    /// panel was dismissed by gesture; snap-point indexes leave the open
    /// flag alone.
    pub async fn on_panel_index_change(&self, index: i32) {
        if index >= 0 {
            return;
        }
        let mut state = self.state.write().await;
        if !state.mounted {
            tracing::debug!("Ignoring panel dismissal, screen not mounted");
            return;
        }
        state.is_comment_panel_open = false;
        state.comment_post = None;
    }

    /// The screen left the tree. Drops all view state; any fetch still in
    /// flight has its result discarded when it lands.
    pub async fn on_unmount(&self) {
        let mut state = self.state.write().await;
        if !state.mounted {
            tracing::debug!("Ignoring unmount, screen not mounted");
            return;
        }
        let generation = state.generation + 1;
        *state = ScreenState::default();
        state.generation = generation;
        tracing::info!("Home feed unmounted");
    }

    /// Current presentation state as an owned value
    pub async fn snapshot(&self) -> HomeFeedSnapshot {
        let state = self.state.read().await;
        HomeFeedSnapshot {
            viewer: state.viewer.clone(),
            friends: state.friends.clone(),
            posts: state.posts.clone(),
            is_refreshing: state.is_refreshing,
            is_pagination_loading: state.is_pagination_loading,
            is_comment_panel_open: state.is_comment_panel_open,
            comment_post: state.comment_post.clone(),
            feed_exhausted: state.feed_exhausted,
            profile_error: state.profile_error.clone(),
            friends_error: state.friends_error.clone(),
            feed_error: state.feed_error.clone(),
            friend_strip_scrollable: state.friends.len() > FRIEND_STRIP_SCROLL_THRESHOLD,
        }
    }

    /// Reads the signed-in user's identifier from the session store. Read at
    /// every use so a sign-in that lands after construction is picked up.
    /// Blank values count as absent.
    fn viewer_id(&self) -> Option<UserId> {
        let id = self.session.get_string(&self.config.viewer_id_key)?;
        if id.trim().is_empty() {
            return None;
        }
        Some(UserId::new(id))
    }

    async fn load_friends(&self, generation: u64) {
        let Some(user_id) = self.viewer_id() else {
            tracing::debug!("Skipping friends load, no signed-in user");
            return;
        };

        match self.friends.get_all_friends(&user_id).await {
            Ok(friends) => {
                let mut state = self.state.write().await;
                if !state.accepts(generation) {
                    tracing::debug!("Dropping friends result, screen is gone");
                    return;
                }
                state.friends = friends;
                state.friends_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch friends");
                let mut state = self.state.write().await;
                if !state.accepts(generation) {
                    return;
                }
                state.friends_error = Some(e.to_string());
            }
        }
    }

    async fn load_first_feed_page(&self, generation: u64) {
        match self.feed.get_newsfeed_posts(None).await {
            Ok(posts) => {
                let mut state = self.state.write().await;
                if !state.accepts(generation) {
                    tracing::debug!("Dropping feed result, screen is gone");
                    return;
                }
                state.posts = posts;
                state.feed_exhausted = false;
                state.feed_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch feed posts");
                let mut state = self.state.write().await;
                if !state.accepts(generation) {
                    return;
                }
                state.feed_error = Some(e.to_string());
            }
        }
    }
}
