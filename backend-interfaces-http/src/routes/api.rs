use axum::routing::{get, patch, post, put};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    character_handlers, effect_handlers, guild_handlers, onboarding_handlers, quest_handlers,
    reward_handlers, status_handlers, user_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(status_handlers::route_not_found)
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/create-guildmaster",
            post(onboarding_handlers::create_guildmaster),
        )
        .route("/join-guild", post(onboarding_handlers::join_guild))
        .route("/auth/login", post(onboarding_handlers::login))
        .route("/character", get(character_handlers::get_character))
        .route("/characters", get(character_handlers::list_characters))
        .route(
            "/quests",
            get(quest_handlers::list_quests).post(quest_handlers::create_quest),
        )
        .route("/quests/:id/start", post(quest_handlers::start_quest))
        .route("/quests/:id/complete", post(quest_handlers::complete_quest))
        .route("/quests/:id/approve", post(quest_handlers::approve_quest))
        .route("/quests/:id/expire", post(quest_handlers::expire_quest))
        .route(
            "/effects/:id/duration",
            put(effect_handlers::set_effect_duration),
        )
        .route("/players/:id/effects", post(effect_handlers::apply_effect))
        .route("/players/:id/rewards", post(character_handlers::grant_reward))
        .route("/guild/invite", post(guild_handlers::invite_member))
        .route("/guild/players", post(guild_handlers::create_player))
        .route(
            "/guild/:id",
            get(guild_handlers::get_guild).patch(guild_handlers::update_guild),
        )
        .route(
            "/rewards",
            get(reward_handlers::list_rewards).post(reward_handlers::create_reward),
        )
        .route(
            "/rewards/:id/purchase",
            post(reward_handlers::purchase_reward),
        )
        .route("/notifications", get(user_handlers::notifications))
        .route("/user/:id", patch(user_handlers::update_user))
        .route("/status/database", get(status_handlers::database_status))
        .route("/status/live", get(status_handlers::health_live))
        .route("/status/metrics", get(status_handlers::metrics_prometheus))
}
