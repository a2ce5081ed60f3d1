use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "food_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub food_id: Option<Uuid>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub request_date: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_notes: Option<String>,
    pub food_name: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub quantity: Option<Json>,
    pub date: Option<String>,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub photo: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub email: Option<String>,
    pub donator_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub donator_photo: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
