//! Join, distribute, accumulate, rank.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::thread;

use tracing::{debug, info, info_span};

use salescomp_core::OrderId;
use salescomp_sales::SalesOwners;

use crate::net_value::calculate_net_value;
use crate::ranking::rank_by_total;
use crate::record::{CommissionRecord, OwnerSummary};
use crate::report::CommissionReport;
use crate::source::{InvoiceLookup, OrderSource};
use crate::tiers::calculate_commission;

/// Commission engine.
///
/// With more than one worker, orders are split into contiguous chunks that
/// are distributed on scoped threads; the chunk results are merged back in
/// input order and folded into owner summaries on the calling thread. The
/// output is identical to the single-worker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionEngine {
    workers: NonZeroUsize,
}

impl Default for CommissionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One owner's share of one order, before accumulation.
#[derive(Debug)]
struct Contribution<'a> {
    owner: &'a str,
    record: CommissionRecord,
}

/// Output of distributing a run of orders.
#[derive(Debug, Default)]
struct Distribution<'a> {
    contributions: Vec<Contribution<'a>>,
    matched: usize,
    skipped: usize,
}

impl<'a> Distribution<'a> {
    fn merge(mut self, other: Distribution<'a>) -> Self {
        self.contributions.extend(other.contributions);
        self.matched += other.matched;
        self.skipped += other.skipped;
        self
    }
}

/// Owner summaries in first-seen order.
#[derive(Debug, Default)]
struct Accumulator {
    summaries: Vec<OwnerSummary>,
    slots: HashMap<String, usize>,
}

impl Accumulator {
    fn add(&mut self, owner: &str, record: CommissionRecord) {
        let slot = match self.slots.get(owner) {
            Some(&slot) => slot,
            None => {
                let slot = self.summaries.len();
                self.summaries.push(OwnerSummary::new(owner));
                self.slots.insert(owner.to_string(), slot);
                slot
            }
        };
        self.summaries[slot].accumulate(record);
    }
}

impl CommissionEngine {
    /// Single-threaded engine.
    pub fn new() -> Self {
        Self {
            workers: NonZeroUsize::MIN,
        }
    }

    /// Engine distributing orders over `workers` threads (0 is treated as 1).
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// Compute every owner's commission over `orders` joined with `invoices`.
    ///
    /// Orders without an invoice are skipped entirely. Each owner position of
    /// a matched order yields one audit record, duplicates included. Owners
    /// are ranked by total descending; equal totals keep first-seen order.
    pub fn calculate_all_commissions<O, I>(&self, orders: &O, invoices: &I) -> CommissionReport
    where
        O: OrderSource + ?Sized,
        I: InvoiceLookup + Sync + ?Sized,
    {
        let orders: Vec<(&OrderId, &SalesOwners)> = orders.orders().collect();
        let span = info_span!(
            "calculate_all_commissions",
            orders = orders.len(),
            invoices = invoices.invoice_count(),
            workers = self.workers.get(),
        );
        let _enter = span.enter();

        let distribution = if self.workers.get() > 1 && orders.len() > 1 {
            distribute_parallel(&orders, invoices, self.workers.get())
        } else {
            distribute(&orders, invoices)
        };

        let mut accumulator = Accumulator::default();
        for contribution in distribution.contributions {
            accumulator.add(contribution.owner, contribution.record);
        }

        let owners = rank_by_total(accumulator.summaries);
        info!(
            owners = owners.len(),
            matched = distribution.matched,
            skipped = distribution.skipped,
            "commission run complete"
        );

        CommissionReport {
            owners,
            orders_matched: distribution.matched,
            orders_skipped: distribution.skipped,
        }
    }
}

fn distribute<'a, I>(orders: &[(&OrderId, &'a SalesOwners)], invoices: &I) -> Distribution<'a>
where
    I: InvoiceLookup + ?Sized,
{
    let mut out = Distribution::default();
    for &(order_id, owners) in orders {
        let Some(invoice) = invoices.invoice_for(order_id) else {
            debug!(%order_id, "no invoice for order; skipping");
            out.skipped += 1;
            continue;
        };

        let net_value = calculate_net_value(invoice.gross_value, invoice.vat);
        for (position, owner) in owners.positioned() {
            out.contributions.push(Contribution {
                owner,
                record: CommissionRecord {
                    order_id: order_id.clone(),
                    position,
                    net_value,
                    commission: calculate_commission(net_value, position),
                },
            });
        }
        out.matched += 1;
    }
    out
}

fn distribute_parallel<'a, I>(
    orders: &[(&OrderId, &'a SalesOwners)],
    invoices: &I,
    workers: usize,
) -> Distribution<'a>
where
    I: InvoiceLookup + Sync + ?Sized,
{
    let chunk_size = orders.len().div_ceil(workers);
    debug!(chunk_size, "distributing orders in parallel");

    thread::scope(|scope| {
        let handles: Vec<_> = orders
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || distribute(chunk, invoices)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .fold(Distribution::default(), Distribution::merge)
    })
}
