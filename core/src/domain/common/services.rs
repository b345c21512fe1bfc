use crate::domain::{
    product_analysis::ports::{AgentRunner, ProductNameExtractor},
    user::ports::{ScanRepository, UserRepository},
};

/// Holds every collaborator the domain services need. Each service trait
/// (`ProductAnalysisService`, `UserService`) is implemented on this type.
#[derive(Clone)]
pub struct Service<U, S, A, X>
where
    U: UserRepository,
    S: ScanRepository,
    A: AgentRunner,
    X: ProductNameExtractor,
{
    pub(crate) user_repository: U,
    pub(crate) scan_repository: S,
    pub(crate) agent_runner: A,
    pub(crate) name_extractor: X,
}

impl<U, S, A, X> Service<U, S, A, X>
where
    U: UserRepository,
    S: ScanRepository,
    A: AgentRunner,
    X: ProductNameExtractor,
{
    pub fn new(user_repository: U, scan_repository: S, agent_runner: A, name_extractor: X) -> Self {
        Self {
            user_repository,
            scan_repository,
            agent_runner,
            name_extractor,
        }
    }
}
