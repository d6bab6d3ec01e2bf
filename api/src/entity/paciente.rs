//! `paciente` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "paciente")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pac_run: i32,
    pub dv_run: String,
    pub pnombre: String,
    pub snombre: Option<String>,
    pub apaterno: String,
    pub amaterno: Option<String>,
    pub fecha_nacimiento: Date,
    pub telefono: Option<String>,
    pub sal_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
