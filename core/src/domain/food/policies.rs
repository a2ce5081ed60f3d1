use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::RescuePolicy},
    food::ports::FoodPolicy,
};

impl FoodPolicy for RescuePolicy {
    async fn can_view_owned_foods(
        &self,
        identity: &Identity,
        owner_email: &str,
    ) -> Result<bool, CoreError> {
        Ok(identity.owns(owner_email))
    }
}
