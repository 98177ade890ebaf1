use apcheck_models::{ApprovalPolicy, PullRequestHandle};
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{is_trigger_event, CountPullRequestApprovalsInterface};
use crate::{
    use_cases::{context::ExecutionContext, events::LoadReviewEventInterface},
    CoreContext, DomainError, Result,
};

/// What happened to a review event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Not a submitted approval: nothing was evaluated.
    Unsupported,
    /// Approvals were counted. `None` when no approval was found.
    Evaluated { is_approved: Option<bool> },
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleReviewEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        execution_context: &ExecutionContext,
    ) -> Result<ReviewOutcome>;
}

#[derive(Component)]
#[shaku(interface = HandleReviewEventInterface)]
pub(crate) struct HandleReviewEvent;

#[async_trait]
impl HandleReviewEventInterface for HandleReviewEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            repository = %execution_context.repository,
            event_path = %execution_context.event_path.display()
        ),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        execution_context: &ExecutionContext,
    ) -> Result<ReviewOutcome> {
        let load_review_event: &dyn LoadReviewEventInterface = ctx.core_module.resolve_ref();
        let event = load_review_event
            .run(&execution_context.event_path)
            .await?;

        let pr_number = event
            .pull_request_number
            .ok_or(DomainError::MissingPullRequest)?;

        let action = event.action.as_deref().unwrap_or_default();
        if !is_trigger_event(action, &event.review_state) {
            let event_name = ctx.config.github.event_name.as_deref().unwrap_or_default();
            ctx.actions_service.info(&format!(
                "{event_name}/{action}/{} doesn't support.",
                event.review_state
            ))?;

            return Ok(ReviewOutcome::Unsupported);
        }

        let policy = ApprovalPolicy::from_inputs(
            &ctx.config.inputs.approvals_count,
            &ctx.config.inputs.only_equal,
        );
        info!(
            approvals_count = policy.approvals_count(),
            only_equal = policy.only_equal(),
            pr_number,
            "Counting approvals"
        );

        let pr_handle = PullRequestHandle::new(execution_context.repository.clone(), pr_number);
        let count_pull_request_approvals: &dyn CountPullRequestApprovalsInterface =
            ctx.core_module.resolve_ref();
        let is_approved = count_pull_request_approvals
            .run(ctx, &pr_handle, &policy)
            .await?;

        Ok(ReviewOutcome::Evaluated { is_approved })
    }
}
