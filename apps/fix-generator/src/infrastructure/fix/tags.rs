//! FIX tag numbers used by the generated messages.

/// Tag 35: MsgType.
pub const MSG_TYPE: u32 = 35;
/// Tag 11: ClOrdID.
pub const CL_ORD_ID: u32 = 11;
/// Tag 37: OrderID.
pub const ORDER_ID: u32 = 37;
/// Tag 17: ExecID.
pub const EXEC_ID: u32 = 17;
/// Tag 20: ExecTransType.
pub const EXEC_TRANS_TYPE: u32 = 20;
/// Tag 150: ExecType.
pub const EXEC_TYPE: u32 = 150;
/// Tag 39: OrdStatus.
pub const ORD_STATUS: u32 = 39;
/// Tag 21: HandlInst.
pub const HANDL_INST: u32 = 21;
/// Tag 55: Symbol.
pub const SYMBOL: u32 = 55;
/// Tag 54: Side.
pub const SIDE: u32 = 54;
/// Tag 60: TransactTime.
pub const TRANSACT_TIME: u32 = 60;
/// Tag 38: OrderQty.
pub const ORDER_QTY: u32 = 38;
/// Tag 40: OrdType.
pub const ORD_TYPE: u32 = 40;
/// Tag 151: LeavesQty.
pub const LEAVES_QTY: u32 = 151;
/// Tag 14: CumQty.
pub const CUM_QTY: u32 = 14;
/// Tag 6: AvgPx.
pub const AVG_PX: u32 = 6;
/// Tag 10: CheckSum.
pub const CHECKSUM: u32 = 10;

/// MsgType of a New Order Single.
pub const MSG_TYPE_NEW_ORDER_SINGLE: &str = "D";
/// MsgType of an Execution Report.
pub const MSG_TYPE_EXECUTION_REPORT: &str = "8";
/// ExecTransType / ExecType written on every report.
pub const EXEC_NEW: u8 = 0;
/// Fixed CheckSum value; no checksum is computed.
pub const CHECKSUM_PLACEHOLDER: &str = "000";
