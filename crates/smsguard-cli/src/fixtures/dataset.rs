//! Labeled sample messages shown by the dataset view.
//!
//! Reference data only; the classifier never learns from it.

use serde::Serialize;
use smsguard_core::{Label, LabeledMessage};

/// The sample dataset, in display order
pub const SAMPLE_DATASET: &[LabeledMessage] = &[
    LabeledMessage::spam("Congratulations! You've won a free ticket. Reply YES to claim."),
    LabeledMessage::ham("Hey, are you coming to the meeting tomorrow?"),
    LabeledMessage::spam("URGENT!! Your account has been blocked. Call 12345 now."),
    LabeledMessage::ham("Please pick up groceries on way home."),
    LabeledMessage::spam("You have won a £1000 prize! Click here to claim now!"),
    LabeledMessage::ham("Thanks for your help today. Really appreciate it!"),
    LabeledMessage::spam("FREE entry in 2 a wkly comp for a chance to win FA Cup final tkts."),
    LabeledMessage::ham("Can we reschedule our lunch meeting to next week?"),
    LabeledMessage::spam("Claim your reward points immediately! Limited time offer!"),
    LabeledMessage::ham("Mom called. She wants you to call her back."),
    LabeledMessage::spam("WINNER!! As a valued network customer you have been selected..."),
    LabeledMessage::ham("Are we still meeting at 6pm for dinner?"),
    LabeledMessage::spam("Urgent! You have won a 1 week FREE membership in our £100,000 Prize Jackpot!"),
    LabeledMessage::ham("I'll be there in 10 minutes"),
    LabeledMessage::spam("Get a FREE iPhone! Text WIN to 12345 now!"),
    LabeledMessage::ham("How was your day at work?"),
    LabeledMessage::spam("100% guaranteed weight loss! Buy now!"),
    LabeledMessage::ham("Love you! See you soon."),
    LabeledMessage::spam("Your mobile number has won £5000! Call now to claim."),
    LabeledMessage::ham("Running late. Be there in 5."),
    LabeledMessage::spam("Congratulations! You have won £2,000 in the weekly draw. Call to claim."),
    LabeledMessage::spam("URGENT: Your account has been suspended. Verify identity immediately to restore access."),
    LabeledMessage::spam("You have an unclaimed refund of $150. Click to claim your refund now."),
    LabeledMessage::spam("Limited offer: Get a free gift card with every purchase this week. Reply YES to receive."),
    LabeledMessage::spam("Final notice: Overdue invoice. Pay now to avoid legal action."),
    LabeledMessage::spam("Exclusive: Work-from-home opportunity - earn £500/day. Sign up today!"),
    LabeledMessage::spam("Congratulations — you’re one of 10 winners of a holiday voucher. Call to confirm."),
    LabeledMessage::spam("Important security alert: Suspicious login detected. Reset your password immediately."),
    LabeledMessage::spam("You’ve been selected for a free trial of Premium. Provide card details to activate."),
    LabeledMessage::spam("Claim your free smartphone now! Limited stock available — respond to this message."),
    LabeledMessage::spam("Tax refund owed: Verify your bank details to receive £350 refund."),
    LabeledMessage::spam("Your parcel is being held — pay shipping fee to have it delivered."),
    LabeledMessage::spam("Congratulations! Instant £100 credit added to your account. Click to accept."),
    LabeledMessage::spam("Get a low-interest loan even with bad credit. Apply now — instant approval."),
    LabeledMessage::spam("You have an unpaid balance. Click here to avoid service interruption."),
    LabeledMessage::spam("This is your final reminder: Verify your details to keep your account active."),
    LabeledMessage::spam("Exclusive investment opportunity — double your money in 7 days. Limited spots."),
    LabeledMessage::spam("Confirm your delivery address to receive a free sample pack."),
    LabeledMessage::spam("Act now: Your credit card has been compromised. Call our fraud team immediately."),
    LabeledMessage::spam("You’ve won a shopping spree worth £500. Reply with your name to claim."),
    LabeledMessage::spam("Free subscription! Enter your payment info to continue after trial ends."),
    LabeledMessage::spam("Urgent: You’ve been pre-approved for a credit increase. Accept now."),
    LabeledMessage::spam("Your voicemail box is full. Click to listen to important messages."),
    LabeledMessage::spam("Exclusive coupon: 90% off your next order — limited time only."),
    LabeledMessage::spam("We found a problem with your delivery. Confirm details to avoid return."),
    LabeledMessage::spam("Get paid to test products. Quick sign-up, big payouts."),
    LabeledMessage::spam("Alert: Unauthorized activity on your card. Confirm transactions now."),
    LabeledMessage::spam("You’re invited to a private investment webinar — guaranteed profit."),
    LabeledMessage::spam("Free voucher inside — reply CLAIM to receive your code."),
    LabeledMessage::spam("Your social media account will be deleted unless you verify now."),
    LabeledMessage::spam("Low fee mortgage refinance available — lock in a lower rate today."),
    LabeledMessage::spam("Congratulations! Your email won a prize. Provide details to receive."),
    LabeledMessage::spam("Receive £250 cashback when you switch services. Apply within 24 hours."),
    LabeledMessage::spam("Immediate action required: Update payment info or subscription will cancel."),
    LabeledMessage::spam("Win big with our instant lottery — buy a ticket now and enter to win."),
    LabeledMessage::spam("Get a free health supplement trial — pay only shipping."),
    LabeledMessage::spam("Your insurance claim has been approved. Send bank details to receive payment."),
    LabeledMessage::spam("Earn money from home reviewing apps. No experience needed."),
    LabeledMessage::spam("Confirm your identity to collect a £1,000 government grant."),
    LabeledMessage::spam("Immediate deposit: You qualify for a bonus of £750. Reply to accept."),
    LabeledMessage::spam("Free Netflix for a year! Sign up with your account details to redeem."),
    LabeledMessage::spam("Your account will be charged today. Click to see recent charges."),
    LabeledMessage::spam("Act fast: Exclusive discount on luxury goods — limited inventory."),
    LabeledMessage::spam("You’ve been selected for a mystery shopper role — high pay, flexible hours."),
    LabeledMessage::spam("Recovery notice: You have unpaid taxes. Contact us to avoid fines."),
    LabeledMessage::spam("Join our crypto pilot — guaranteed returns. Early access ends soon."),
    LabeledMessage::spam("Confirm your card to receive a free shopping voucher worth £200."),
];

/// Entries matching `label`, or every entry when `label` is `None`
pub fn filter_by_label(label: Option<Label>) -> impl Iterator<Item = &'static LabeledMessage> {
    SAMPLE_DATASET
        .iter()
        .filter(move |entry| label.map_or(true, |l| entry.label == l))
}

/// Label distribution of the sample dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub total: usize,
    pub spam: usize,
    pub ham: usize,
}

impl DatasetStats {
    pub fn compute(entries: &[LabeledMessage]) -> Self {
        let spam = entries.iter().filter(|e| e.label == Label::Spam).count();
        Self {
            total: entries.len(),
            spam,
            ham: entries.len() - spam,
        }
    }

    /// Share of `label` as a percentage with one decimal, e.g. `"85.1%"`
    pub fn share_percent(&self, label: Label) -> String {
        let count = match label {
            Label::Spam => self.spam,
            Label::Ham => self.ham,
        };
        if self.total == 0 {
            return "0.0%".to_string();
        }
        format!("{:.1}%", count as f64 / self.total as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_size_and_distribution() {
        let stats = DatasetStats::compute(SAMPLE_DATASET);
        assert_eq!(
            stats,
            DatasetStats {
                total: 67,
                spam: 57,
                ham: 10,
            }
        );
        assert_eq!(stats.share_percent(Label::Spam), "85.1%");
        assert_eq!(stats.share_percent(Label::Ham), "14.9%");
    }

    #[test]
    fn test_entries_preserved_verbatim() {
        assert_eq!(
            SAMPLE_DATASET[0].message,
            "Congratulations! You've won a free ticket. Reply YES to claim."
        );
        assert_eq!(SAMPLE_DATASET[1].label, Label::Ham);
        assert_eq!(
            SAMPLE_DATASET[26].message,
            "Congratulations — you’re one of 10 winners of a holiday voucher. Call to confirm."
        );
        assert_eq!(
            SAMPLE_DATASET.last().map(|e| e.message),
            Some("Confirm your card to receive a free shopping voucher worth £200.")
        );
    }

    #[test]
    fn test_filter_by_label() {
        assert_eq!(filter_by_label(None).count(), 67);
        assert!(filter_by_label(Some(Label::Ham)).all(|e| e.label == Label::Ham));
        assert_eq!(filter_by_label(Some(Label::Ham)).count(), 10);
        assert_eq!(filter_by_label(Some(Label::Spam)).count(), 57);
    }

    #[test]
    fn test_empty_stats() {
        let stats = DatasetStats::compute(&[]);
        assert_eq!(stats.share_percent(Label::Spam), "0.0%");
    }
}
