use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenCodec, value_objects::Identity},
    common::{
        entities::app_errors::CoreError,
        policies::ensure_policy,
        services::Service,
        value_objects::{DeleteOutcome, InsertOutcome, UpdateOutcome},
    },
    food::{
        entities::{Food, FoodConfig},
        ports::{FoodPolicy, FoodRepository, FoodService},
        value_objects::{
            ClaimFoodInput, CreateFoodInput, FoodSortOrder, GetFoodsByOwnerInput, GetFoodsFilter,
            UpdateFoodInput,
        },
    },
    food_request::ports::FoodRequestRepository,
    health::ports::HealthCheckRepository,
};

impl<F, FR, HC, T> FoodService for Service<F, FR, HC, T>
where
    F: FoodRepository,
    FR: FoodRequestRepository,
    HC: HealthCheckRepository,
    T: TokenCodec,
{
    async fn create_food(
        &self,
        identity: Option<Identity>,
        input: CreateFoodInput,
    ) -> Result<InsertOutcome, CoreError> {
        let mut donor = input.donor;

        // A verified session decides who the donor is.
        if let Some(identity) = identity {
            donor.email = Some(identity.email);
            if identity.name.is_some() {
                donor.donator_name = identity.name;
            }
            if identity.photo.is_some() {
                donor.donator_photo = identity.photo;
            }
        }

        let food = Food::new(FoodConfig {
            details: input.details,
            donor,
            status: input.status,
        });

        let created = self.food_repository.create_food(food).await?;
        info!(food_id = %created.id, "food created");

        Ok(InsertOutcome::new(created.id))
    }

    async fn get_available_foods(&self, sort: FoodSortOrder) -> Result<Vec<Food>, CoreError> {
        self.food_repository
            .fetch_foods(GetFoodsFilter::available(sort))
            .await
    }

    async fn get_food(&self, food_id: Uuid) -> Result<Option<Food>, CoreError> {
        self.food_repository.get_food_by_id(food_id).await
    }

    async fn get_foods_by_owner(
        &self,
        identity: Identity,
        input: GetFoodsByOwnerInput,
    ) -> Result<Vec<Food>, CoreError> {
        ensure_policy(
            self.policy
                .can_view_owned_foods(&identity, &input.email)
                .await,
            "cannot list foods of another donor",
        )?;

        self.food_repository
            .fetch_foods(GetFoodsFilter {
                email: Some(input.email),
                ..Default::default()
            })
            .await
    }

    async fn update_food(&self, input: UpdateFoodInput) -> Result<UpdateOutcome, CoreError> {
        let outcome = self
            .food_repository
            .upsert_food_details(input.food_id, input.details)
            .await?;

        if let Some(upserted_id) = outcome.upserted_id {
            info!(food_id = %upserted_id, "update created a new food");
        }

        Ok(outcome)
    }

    async fn delete_food(&self, food_id: Uuid) -> Result<DeleteOutcome, CoreError> {
        let deleted = self.food_repository.delete_food(food_id).await?;

        Ok(DeleteOutcome::new(deleted))
    }

    async fn claim_food(
        &self,
        identity: Option<Identity>,
        input: ClaimFoodInput,
    ) -> Result<InsertOutcome, CoreError> {
        let mut requester = input.requester;
        if let Some(identity) = identity {
            requester.user_email = Some(identity.email);
            if requester.user_name.is_none() {
                requester.user_name = identity.name;
            }
        }

        let created = self
            .food_repository
            .request_food(input.food_id, requester)
            .await?
            .ok_or_else(|| {
                warn!(food_id = %input.food_id, "claim on missing or unavailable food");
                CoreError::RequestFailed
            })?;

        info!(food_id = %input.food_id, request_id = %created.id, "food claimed");

        Ok(InsertOutcome::new(created.id))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        common::test_support::test_service,
        food::entities::{Donor, FoodDetails, FoodStatus},
        food_request::{entities::Requester, ports::FoodRequestService},
    };

    fn details(name: &str, date: &str) -> FoodDetails {
        FoodDetails {
            food_name: Some(name.to_string()),
            quantity: Some(json!(5)),
            date: Some(date.to_string()),
            location: Some("Dhaka".to_string()),
            photo: None,
            notes: Some("fresh".to_string()),
        }
    }

    fn donor(email: &str) -> Donor {
        Donor {
            email: Some(email.to_string()),
            donator_name: Some("Ann".to_string()),
            donator_photo: Some("https://img/ann.png".to_string()),
        }
    }

    fn identity(email: &str) -> Identity {
        Identity {
            email: email.to_string(),
            name: None,
            photo: None,
        }
    }

    fn requester(email: &str) -> Requester {
        Requester {
            user_email: Some(email.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips_fields() {
        let (service, _) = test_service();

        let outcome = service
            .create_food(
                None,
                CreateFoodInput {
                    details: details("Rice", "2024-05-01"),
                    donor: donor("a@x.com"),
                    status: None,
                },
            )
            .await
            .unwrap();

        let food = service.get_food(outcome.inserted_id).await.unwrap().unwrap();
        assert_eq!(food.details, details("Rice", "2024-05-01"));
        assert_eq!(food.donor, donor("a@x.com"));
        assert_eq!(food.status, Some(FoodStatus::Available));
    }

    #[tokio::test]
    async fn test_create_takes_donor_from_identity() {
        let (service, _) = test_service();

        let outcome = service
            .create_food(
                Some(Identity {
                    email: "real@x.com".to_string(),
                    name: Some("Real".to_string()),
                    photo: None,
                }),
                CreateFoodInput {
                    details: details("Rice", "2024-05-01"),
                    donor: donor("spoofed@x.com"),
                    status: None,
                },
            )
            .await
            .unwrap();

        let food = service.get_food(outcome.inserted_id).await.unwrap().unwrap();
        assert_eq!(food.donor.email.as_deref(), Some("real@x.com"));
        assert_eq!(food.donor.donator_name.as_deref(), Some("Real"));
        assert_eq!(
            food.donor.donator_photo.as_deref(),
            Some("https://img/ann.png")
        );
    }

    #[tokio::test]
    async fn test_get_unknown_food_is_none() {
        let (service, _) = test_service();
        assert_eq!(service.get_food(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_available_listing_filters_and_sorts_by_date() {
        let (service, _) = test_service();

        for (name, date) in [("A", "2024-05-02"), ("B", "2024-05-01"), ("C", "2024-05-03")] {
            service
                .create_food(
                    None,
                    CreateFoodInput {
                        details: details(name, date),
                        donor: donor("a@x.com"),
                        status: None,
                    },
                )
                .await
                .unwrap();
        }
        service
            .create_food(
                None,
                CreateFoodInput {
                    details: details("Taken", "2024-05-04"),
                    donor: donor("a@x.com"),
                    status: Some(FoodStatus::Requested),
                },
            )
            .await
            .unwrap();

        let names = |foods: Vec<Food>| {
            foods
                .into_iter()
                .map(|f| f.details.food_name.unwrap())
                .collect::<Vec<_>>()
        };

        let desc = service
            .get_available_foods(FoodSortOrder::Desc)
            .await
            .unwrap();
        assert_eq!(names(desc), vec!["C", "A", "B"]);

        let asc = service
            .get_available_foods(FoodSortOrder::Asc)
            .await
            .unwrap();
        assert!(asc.iter().all(Food::is_available));
        assert_eq!(names(asc), vec!["B", "A", "C"]);
    }

    #[tokio::test]
    async fn test_owner_listing_requires_matching_identity() {
        let (service, _) = test_service();
        service
            .create_food(
                None,
                CreateFoodInput {
                    details: details("Rice", "2024-05-01"),
                    donor: donor("a@x.com"),
                    status: None,
                },
            )
            .await
            .unwrap();

        let mine = service
            .get_foods_by_owner(
                identity("a@x.com"),
                GetFoodsByOwnerInput {
                    email: "a@x.com".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);

        let err = service
            .get_foods_by_owner(
                identity("b@x.com"),
                GetFoodsByOwnerInput {
                    email: "a@x.com".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));

        // exact, case-sensitive match
        let upper = service
            .get_foods_by_owner(
                identity("A@x.com"),
                GetFoodsByOwnerInput {
                    email: "A@x.com".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(upper.is_empty());
    }

    #[tokio::test]
    async fn test_update_leaves_status_and_donor_untouched() {
        let (service, _) = test_service();
        let id = service
            .create_food(
                None,
                CreateFoodInput {
                    details: details("Rice", "2024-05-01"),
                    donor: donor("a@x.com"),
                    status: Some(FoodStatus::Requested),
                },
            )
            .await
            .unwrap()
            .inserted_id;

        let outcome = service
            .update_food(UpdateFoodInput {
                food_id: id,
                details: details("Beans", "2024-06-01"),
            })
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::matched(true));

        let food = service.get_food(id).await.unwrap().unwrap();
        assert_eq!(food.details.food_name.as_deref(), Some("Beans"));
        assert_eq!(food.status, Some(FoodStatus::Requested));
        assert_eq!(food.donor, donor("a@x.com"));
    }

    #[tokio::test]
    async fn test_update_with_same_values_modifies_nothing() {
        let (service, _) = test_service();
        let id = service
            .create_food(
                None,
                CreateFoodInput {
                    details: details("Rice", "2024-05-01"),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .inserted_id;

        let outcome = service
            .update_food(UpdateFoodInput {
                food_id: id,
                details: details("Rice", "2024-05-01"),
            })
            .await
            .unwrap();
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.modified_count, 0);
    }

    #[tokio::test]
    async fn test_update_of_unknown_id_upserts() {
        let (service, _) = test_service();
        let id = Uuid::new_v4();

        let outcome = service
            .update_food(UpdateFoodInput {
                food_id: id,
                details: details("Bread", "2024-05-01"),
            })
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::upserted(id));

        let food = service.get_food(id).await.unwrap().unwrap();
        assert_eq!(food.status, None);
        assert_eq!(food.donor, Donor::default());

        let available = service
            .get_available_foods(FoodSortOrder::Desc)
            .await
            .unwrap();
        assert!(available.iter().all(|f| f.id != id));

        let err = service
            .claim_food(
                None,
                ClaimFoodInput {
                    food_id: id,
                    requester: requester("b@x.com"),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::RequestFailed);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (service, _) = test_service();
        let id = service
            .create_food(None, CreateFoodInput::default())
            .await
            .unwrap()
            .inserted_id;

        assert_eq!(service.delete_food(id).await.unwrap().deleted_count, 1);
        assert_eq!(service.delete_food(id).await.unwrap().deleted_count, 0);
        assert_eq!(service.get_food(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_claim_scenario() {
        let (service, _) = test_service();
        let id = service
            .create_food(
                None,
                CreateFoodInput {
                    details: FoodDetails {
                        food_name: Some("Rice".to_string()),
                        quantity: Some(json!(5)),
                        ..Default::default()
                    },
                    donor: donor("a@x.com"),
                    status: Some(FoodStatus::Available),
                },
            )
            .await
            .unwrap()
            .inserted_id;

        let available = service
            .get_available_foods(FoodSortOrder::default())
            .await
            .unwrap();
        assert!(available.iter().any(|f| f.id == id));

        service
            .claim_food(
                None,
                ClaimFoodInput {
                    food_id: id,
                    requester: requester("b@x.com"),
                },
            )
            .await
            .unwrap();

        let food = service.get_food(id).await.unwrap().unwrap();
        assert_eq!(food.status, Some(FoodStatus::Requested));

        let requests = service
            .get_food_requests_by_requester(identity("b@x.com"), "b@x.com".to_string())
            .await
            .unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].details.food_name.as_deref(), Some("Rice"));
        assert_eq!(requests[0].donor.email.as_deref(), Some("a@x.com"));
        assert_eq!(requests[0].food_id, Some(id));
    }

    #[tokio::test]
    async fn test_claim_of_unknown_food_fails_without_request() {
        let (service, store) = test_service();

        let err = service
            .claim_food(
                None,
                ClaimFoodInput {
                    food_id: Uuid::new_v4(),
                    requester: requester("b@x.com"),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::RequestFailed);
        assert_eq!(store.request_count(), 0);
    }

    #[tokio::test]
    async fn test_second_claim_fails() {
        let (service, store) = test_service();
        let id = service
            .create_food(None, CreateFoodInput::default())
            .await
            .unwrap()
            .inserted_id;

        let claim = || ClaimFoodInput {
            food_id: id,
            requester: requester("b@x.com"),
        };

        service.claim_food(None, claim()).await.unwrap();
        let err = service.claim_food(None, claim()).await.unwrap_err();

        assert_eq!(err, CoreError::RequestFailed);
        assert_eq!(store.request_count(), 1);
    }

    #[tokio::test]
    async fn test_claim_uses_identity_as_requester() {
        let (service, store) = test_service();
        let id = service
            .create_food(None, CreateFoodInput::default())
            .await
            .unwrap()
            .inserted_id;

        service
            .claim_food(
                Some(Identity {
                    email: "real@x.com".to_string(),
                    name: Some("Real".to_string()),
                    photo: None,
                }),
                ClaimFoodInput {
                    food_id: id,
                    requester: requester("spoofed@x.com"),
                },
            )
            .await
            .unwrap();

        let stored = store.requests();
        assert_eq!(stored[0].requester.user_email.as_deref(), Some("real@x.com"));
        assert_eq!(stored[0].requester.user_name.as_deref(), Some("Real"));
    }

    #[tokio::test]
    async fn test_claim_losing_the_race_writes_nothing() {
        let (service, store) = test_service();
        let id = service
            .create_food(None, CreateFoodInput::default())
            .await
            .unwrap()
            .inserted_id;

        // the conditional write finds the item already taken
        store.fail_next_request_food();

        let err = service
            .claim_food(
                None,
                ClaimFoodInput {
                    food_id: id,
                    requester: requester("b@x.com"),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::RequestFailed);
        assert_eq!(store.request_count(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_claims_have_one_winner() {
        let (service, store) = test_service();
        let id = service
            .create_food(None, CreateFoodInput::default())
            .await
            .unwrap()
            .inserted_id;

        let claim = |email: &str| ClaimFoodInput {
            food_id: id,
            requester: requester(email),
        };

        let (first, second) = tokio::join!(
            service.claim_food(None, claim("b@x.com")),
            service.claim_food(None, claim("c@x.com")),
        );

        assert_eq!([first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(store.request_count(), 1);
    }

    #[tokio::test]
    async fn test_claim_snapshots_latest_details() {
        let (service, store) = test_service();
        let id = service
            .create_food(
                None,
                CreateFoodInput {
                    details: details("Rice", "2024-05-01"),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .inserted_id;

        service
            .update_food(UpdateFoodInput {
                food_id: id,
                details: details("Biryani", "2024-05-01"),
            })
            .await
            .unwrap();
        service
            .claim_food(
                None,
                ClaimFoodInput {
                    food_id: id,
                    requester: requester("b@x.com"),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            store.requests()[0].details.food_name.as_deref(),
            Some("Biryani")
        );
    }
}
