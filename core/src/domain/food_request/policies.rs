use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::RescuePolicy},
    food_request::ports::FoodRequestPolicy,
};

impl FoodRequestPolicy for RescuePolicy {
    async fn can_view_requests_of(
        &self,
        identity: &Identity,
        user_email: &str,
    ) -> Result<bool, CoreError> {
        Ok(identity.owns(user_email))
    }
}
