use proptest::prelude::*;
use clarity_mock::runtime::{MockDispatcher, Outcome, Response, SessionContext, PROPERTY_VERIFICATION};

use crate::utils::{call_args, recognized_function};

proptest! {
    #[test]
    fn recognized_calls_ignore_arguments(
        function in recognized_function(),
        first in call_args(),
        second in call_args(),
    ) {
        let dispatcher = MockDispatcher::property_verification();
        let session = SessionContext::new();

        let a = dispatcher.dispatch(&session, PROPERTY_VERIFICATION, function, &first);
        let b = dispatcher.dispatch(&session, PROPERTY_VERIFICATION, function, &second);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn unrecognized_calls_return_999(
        contract in "[a-z][a-z-]{0,24}",
        function in "[a-z][a-z-]{0,24}",
        args in call_args(),
    ) {
        let dispatcher = MockDispatcher::property_verification();
        prop_assume!(!dispatcher.is_recognized(&contract, &function));

        let outcome = dispatcher.dispatch(&SessionContext::new(), &contract, &function, &args);
        prop_assert_eq!(outcome, Outcome::Response(Response::Err(999)));
    }

    #[test]
    fn reset_restores_defaults(sender in "ST[0-9A-Z]{38}", blocks in 0u64..1_000_000) {
        let mut session = SessionContext::new();
        session.set_tx_sender(sender);
        session.advance_blocks(blocks).unwrap();

        session.reset();

        prop_assert_eq!(session, SessionContext::new());
    }
}
