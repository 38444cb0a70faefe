// tests/support/mocks/store.rs
//! 全リポジトリトレイトを実装するインメモリストア
use async_trait::async_trait;
use conduit_core::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
        ArticleWriteRepository, FavoriteRepository, NewArticle, Pagination,
    },
    comment::{Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    user::{Email, NewUser, User, UserId, UserRepository, UserUpdate, Username},
};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicBool, Ordering},
};

#[derive(Default)]
struct State {
    next_user: i64,
    next_article: i64,
    next_comment: i64,
    users: BTreeMap<UserId, User>,
    follows: BTreeSet<(UserId, UserId)>,
    favorites: BTreeSet<(UserId, ArticleId)>,
    articles: BTreeMap<ArticleId, Article>,
    comments: BTreeMap<CommentId, Comment>,
}

impl State {
    /// Users are stored without relationship sets; reads attach them the way
    /// the Postgres repository does.
    fn materialize(&self, user: &User) -> User {
        let mut user = user.clone();
        user.following = self
            .follows
            .iter()
            .filter(|(follower, _)| *follower == user.id)
            .map(|(_, followee)| *followee)
            .collect();
        user.favorites = self
            .favorites
            .iter()
            .filter(|(fan, _)| *fan == user.id)
            .map(|(_, article)| *article)
            .collect();
        user
    }

    fn ensure_unique_user(&self, id: Option<UserId>, username: &Username, email: &Email) -> DomainResult<()> {
        for other in self.users.values().filter(|u| Some(u.id) != id) {
            if &other.username == username {
                return Err(DomainError::Conflict("username already exists".into()));
            }
            if &other.email == email {
                return Err(DomainError::Conflict("email already exists".into()));
            }
        }
        Ok(())
    }

    fn article_mut(&mut self, id: ArticleId) -> DomainResult<&mut Article> {
        self.articles
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

/// Cheap to clone; clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
    fail_link_comment: Arc<AtomicBool>,
    fail_unlink_comment: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("memory store poisoned")
    }

    /* ---- 障害注入 ---- */

    pub fn fail_link_comment(&self, fail: bool) {
        self.fail_link_comment.store(fail, Ordering::SeqCst);
    }

    pub fn fail_unlink_comment(&self, fail: bool) {
        self.fail_unlink_comment.store(fail, Ordering::SeqCst);
    }

    /* ---- 検査用アクセサ ---- */

    pub fn article_by_slug(&self, slug: &str) -> Option<Article> {
        self.lock()
            .articles
            .values()
            .find(|a| a.slug.as_str() == slug)
            .cloned()
    }

    pub fn comment(&self, id: CommentId) -> Option<Comment> {
        self.lock().comments.get(&id).cloned()
    }

    pub fn comment_count(&self) -> usize {
        self.lock().comments.len()
    }

    pub fn favorites_of(&self, user: UserId) -> HashSet<ArticleId> {
        self.lock()
            .favorites
            .iter()
            .filter(|(fan, _)| *fan == user)
            .map(|(_, a)| *a)
            .collect()
    }

    /// Overwrites the cached counter directly, simulating drift.
    pub fn corrupt_favorites_count(&self, id: ArticleId, count: u64) {
        if let Some(article) = self.lock().articles.get_mut(&id) {
            article.favorites_count = count;
        }
    }

    pub fn remove_user(&self, id: UserId) {
        self.lock().users.remove(&id);
    }
}

/* -------------------------------- UserRepository -------------------------------- */

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.lock();
        state.ensure_unique_user(None, &new_user.username, &new_user.email)?;
        state.next_user += 1;
        let user = User {
            id: UserId::new(state.next_user)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            following: HashSet::new(),
            favorites: HashSet::new(),
            created_at: new_user.created_at,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.lock();
        let mut user = state
            .users
            .get(&update.id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        if let Some(image) = update.image {
            user.image = image;
        }

        state.ensure_unique_user(Some(user.id), &user.username, &user.email)?;
        state.users.insert(user.id, user.clone());
        Ok(state.materialize(&user))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.lock();
        Ok(state.users.get(&id).map(|u| state.materialize(u)))
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.lock();
        Ok(state
            .users
            .values()
            .find(|u| &u.username == username)
            .map(|u| state.materialize(u)))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.lock();
        Ok(state
            .users
            .values()
            .find(|u| &u.email == email)
            .map(|u| state.materialize(u)))
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let state = self.lock();
        Ok(ids
            .iter()
            .filter_map(|id| state.users.get(id))
            .map(|u| state.materialize(u))
            .collect())
    }

    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.lock().follows.insert((follower, followee));
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.lock().follows.remove(&(follower, followee));
        Ok(())
    }
}

/* -------------------------------- Article repositories -------------------------------- */

#[async_trait]
impl ArticleWriteRepository for MemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.lock();
        if state.articles.values().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if !state.users.contains_key(&article.author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        state.next_article += 1;
        let created = Article {
            id: ArticleId::new(state.next_article)?,
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            tag_list: article.tag_list,
            author_id: article.author_id,
            favorites_count: 0,
            comment_ids: Vec::new(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        state.articles.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.lock();
        let article = state.article_mut(update.id)?;
        article.set_content(
            update.title,
            update.description,
            update.body,
            update.tag_list,
            update.updated_at,
        );
        Ok(article.clone())
    }

    /// Favorites cascade with the article; comments are left to the caller.
    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.lock();
        state
            .articles
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        state.favorites.retain(|(_, article)| *article != id);
        Ok(())
    }

    async fn set_favorites_count(&self, id: ArticleId, count: u64) -> DomainResult<Article> {
        let mut state = self.lock();
        let article = state.article_mut(id)?;
        article.favorites_count = count;
        Ok(article.clone())
    }

    async fn link_comment(&self, id: ArticleId, comment_id: CommentId) -> DomainResult<()> {
        if self.fail_link_comment.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("injected link failure".into()));
        }
        let mut state = self.lock();
        state.article_mut(id)?.comment_ids.push(comment_id);
        Ok(())
    }

    async fn unlink_comment(&self, id: ArticleId, comment_id: CommentId) -> DomainResult<()> {
        if self.fail_unlink_comment.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("injected unlink failure".into()));
        }
        let mut state = self.lock();
        state.article_mut(id)?.comment_ids.retain(|c| *c != comment_id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for MemoryStore {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .lock()
            .articles
            .values()
            .find(|a| &a.slug == slug)
            .cloned())
    }

    async fn list(&self, filter: &ArticleFilter, page: Pagination) -> DomainResult<Vec<Article>> {
        let mut matching: Vec<Article> = self
            .lock()
            .articles
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(matching
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        Ok(self
            .lock()
            .articles
            .values()
            .filter(|a| filter.matches(a))
            .count() as u64)
    }

    async fn list_tags(&self) -> DomainResult<Vec<String>> {
        let tags: BTreeSet<String> = self
            .lock()
            .articles
            .values()
            .flat_map(|a| a.tag_list.as_slice().to_vec())
            .collect();
        Ok(tags.into_iter().collect())
    }
}

#[async_trait]
impl FavoriteRepository for MemoryStore {
    async fn add(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        self.lock().favorites.insert((user_id, article_id));
        Ok(())
    }

    async fn remove(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        self.lock().favorites.remove(&(user_id, article_id));
        Ok(())
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        Ok(self
            .lock()
            .favorites
            .iter()
            .filter(|(_, a)| *a == article_id)
            .count() as u64)
    }
}

/* -------------------------------- CommentRepository -------------------------------- */

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.lock();
        state.next_comment += 1;
        let created = Comment {
            id: CommentId::new(state.next_comment)?,
            body: comment.body,
            article_id: comment.article_id,
            author_id: comment.author_id,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.lock().comments.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[CommentId]) -> DomainResult<Vec<Comment>> {
        let state = self.lock();
        Ok(ids
            .iter()
            .filter_map(|id| state.comments.get(id).cloned())
            .collect())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        self.lock()
            .comments
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }

    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let mut state = self.lock();
        let before = state.comments.len();
        state.comments.retain(|_, c| c.article_id != article_id);
        Ok((before - state.comments.len()) as u64)
    }
}
