use apcheck_actions::ActionsService;
use apcheck_config::Config;
use apcheck_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub actions_service: &'a (dyn ActionsService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use apcheck_actions::MockActionsService;
    use apcheck_config::Config;
    use apcheck_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub actions_service: MockActionsService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_lookup("0.0.0".into(), |_| None),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                actions_service: MockActionsService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                actions_service: &self.actions_service,
            }
        }
    }
}
