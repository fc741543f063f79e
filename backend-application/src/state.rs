use std::sync::Arc;

use backend_domain::ports::{
    CharacterRepository, EffectRepository, GuildRepository, PasswordHasher, QuestRepository,
    RewardRepository, StatusRepository, UserRepository,
};
use backend_domain::RuntimeConfig;

use crate::Metrics;

/// A single backend that implements every repository port.
pub trait Store:
    UserRepository
    + GuildRepository
    + CharacterRepository
    + QuestRepository
    + EffectRepository
    + RewardRepository
    + StatusRepository
    + 'static
{
}

impl<T> Store for T where
    T: UserRepository
        + GuildRepository
        + CharacterRepository
        + QuestRepository
        + EffectRepository
        + RewardRepository
        + StatusRepository
        + 'static
{
}

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub users: Arc<dyn UserRepository>,
    pub guilds: Arc<dyn GuildRepository>,
    pub characters: Arc<dyn CharacterRepository>,
    pub quests: Arc<dyn QuestRepository>,
    pub effects: Arc<dyn EffectRepository>,
    pub rewards: Arc<dyn RewardRepository>,
    pub status: Arc<dyn StatusRepository>,
    pub passwords: Arc<dyn PasswordHasher>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new<S: Store>(
        config: RuntimeConfig,
        store: Arc<S>,
        passwords: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            config,
            users: store.clone(),
            guilds: store.clone(),
            characters: store.clone(),
            quests: store.clone(),
            effects: store.clone(),
            rewards: store.clone(),
            status: store,
            passwords,
            metrics: Arc::new(Metrics::default()),
        }
    }
}
