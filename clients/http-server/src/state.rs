use actix_web::web::Data;
use recordstore::{
    consts::consts::RecordId, database::store::RecordStore, model::record::RecordInput,
};

use crate::{
    auth::AdminGate,
    config::{load_seed, validate_resources, Cli, ConfigError},
};

/// A mounted resource: its path segment and the store that backs it
pub struct RecordResource {
    name: String,
    store: RecordStore,
}

impl RecordResource {
    pub fn new(name: impl Into<String>, store: RecordStore) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Canonical path of a record, used for `Location` headers
    pub fn location(&self, id: &RecordId) -> String {
        format!("/{}/{}", self.name, id)
    }
}

/// Everything the app factory needs, built once in `main` and shared by every worker
#[derive(Clone)]
pub struct AppState {
    pub resources: Vec<Data<RecordResource>>,
    pub admin_gate: Data<AdminGate>,
}

impl AppState {
    pub fn new(resources: Vec<RecordResource>, admin_gate: AdminGate) -> Self {
        Self {
            resources: resources.into_iter().map(Data::new).collect(),
            admin_gate: Data::new(admin_gate),
        }
    }

    pub fn from_cli(args: &Cli) -> Result<Self, ConfigError> {
        let admin_gate = AdminGate::from_env()?;

        let seed: Vec<RecordInput> = match &args.seed {
            Some(path) => load_seed(path)?,
            None => vec![],
        };

        let resources = validate_resources(&args.resources)?
            .into_iter()
            .map(|name| {
                let store = RecordStore::new().with_records(seed.iter().cloned());

                log::info!("Mounted /{} [Records: {}]", name, store.len());

                RecordResource::new(name, store)
            })
            .collect();

        Ok(Self::new(resources, admin_gate))
    }
}
