use std::collections::HashSet;

use apcheck_actions::ActionsService;
use apcheck_ghapi_interface::{review::GhReviewStateApi, reviews::ReviewApi};
use apcheck_models::{ApprovalPolicy, PullRequestHandle};
use async_trait::async_trait;
use futures::TryStreamExt;
use shaku::{Component, Interface};
use tracing::{debug, warn};

use crate::{CoreContext, Result};

/// Name of the decision output and exported variable.
pub const IS_APPROVED_OUTPUT: &str = "isApproved";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CountPullRequestApprovalsInterface: Interface {
    /// Walk every review of the pull request and publish the decision after
    /// each approval.
    ///
    /// Returns the last published decision, or `None` when no approval was
    /// found.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        policy: &ApprovalPolicy,
    ) -> Result<Option<bool>>;
}

#[derive(Component)]
#[shaku(interface = CountPullRequestApprovalsInterface)]
pub(crate) struct CountPullRequestApprovals;

#[async_trait]
impl CountPullRequestApprovalsInterface for CountPullRequestApprovals {
    #[tracing::instrument(
        skip_all,
        fields(
            pr_handle = %pr_handle,
            approvals_count = policy.approvals_count(),
            only_equal = policy.only_equal()
        ),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        policy: &ApprovalPolicy,
    ) -> Result<Option<bool>> {
        let reviews = ReviewApi::stream_reviews_for_pull_request(
            ctx.api_service,
            pr_handle.owner(),
            pr_handle.name(),
            pr_handle.number(),
        );
        futures::pin_mut!(reviews);

        let mut approvers: HashSet<String> = HashSet::new();
        let mut decision = None;

        while let Some(review) = reviews.try_next().await? {
            if review.state != GhReviewStateApi::Approved {
                continue;
            }

            let Some(login) = review.reviewer_login() else {
                warn!(review_id = review.id, "Skipping approval without reviewer");
                continue;
            };

            approvers.insert(login.to_owned());
            let is_approved = policy.is_satisfied(approvers.len());

            debug!(
                approvers = ?approvers,
                approvers_count = approvers.len(),
                is_approved,
                "Approval counted"
            );

            publish_decision(ctx.actions_service, is_approved)?;
            decision = Some(is_approved);
        }

        Ok(decision)
    }
}

fn publish_decision(actions_service: &dyn ActionsService, is_approved: bool) -> Result<()> {
    let value = if is_approved { "true" } else { "false" };
    actions_service.set_output(IS_APPROVED_OUTPUT, value)?;
    actions_service.export_variable(IS_APPROVED_OUTPUT, value)?;

    Ok(())
}
