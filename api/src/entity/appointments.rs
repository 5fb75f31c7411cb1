use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub specialty_id: Uuid,
    pub specialist_id: Uuid,
    pub appointment_date: Date,
    pub appointment_time: Time,
    pub status: String,
    pub price_cents: i64,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    #[sea_orm(unique)]
    pub unique_token: String,
    pub notes: Option<String>,
    pub confirmed_at: Option<DateTimeWithTimeZone>,
    pub confirmed_by: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
