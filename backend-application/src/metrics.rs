use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    onboardings: AtomicU64,
    quests_created: AtomicU64,
    quests_approved: AtomicU64,
    purchases: AtomicU64,
    effects_decayed: AtomicU64,
}

impl Metrics {
    pub fn record_onboarding(&self) {
        self.onboardings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_quest_created(&self) {
        self.quests_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_quest_approved(&self) {
        self.quests_approved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_purchase(&self) {
        self.purchases.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_effects_decayed(&self, count: u64) {
        self.effects_decayed.fetch_add(count, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let onboardings = self.onboardings.load(Ordering::Relaxed);
        let created = self.quests_created.load(Ordering::Relaxed);
        let approved = self.quests_approved.load(Ordering::Relaxed);
        let purchases = self.purchases.load(Ordering::Relaxed);
        let decayed = self.effects_decayed.load(Ordering::Relaxed);

        format!(
            "# TYPE fguild_onboardings_total counter\n\
fguild_onboardings_total {}\n\
# TYPE fguild_quests_created_total counter\n\
fguild_quests_created_total {}\n\
# TYPE fguild_quests_approved_total counter\n\
fguild_quests_approved_total {}\n\
# TYPE fguild_purchases_total counter\n\
fguild_purchases_total {}\n\
# TYPE fguild_effects_decayed_total counter\n\
fguild_effects_decayed_total {}\n",
            onboardings, created, approved, purchases, decayed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prometheus_output_reflects_counters() {
        let metrics = Metrics::default();
        metrics.record_quest_created();
        metrics.record_quest_created();
        metrics.record_effects_decayed(3);
        let text = metrics.render_prometheus();
        assert!(text.contains("fguild_quests_created_total 2\n"));
        assert!(text.contains("fguild_effects_decayed_total 3\n"));
        assert!(text.contains("fguild_purchases_total 0\n"));
    }
}
