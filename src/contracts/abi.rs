//! Interface definitions of the deployed contracts.
//!
//! Only the functions this crate calls and the events it reads are declared.

use alloy::sol;

sol! {
    /// Escrow entry point: order creation and voucher purchase.
    #[derive(Debug, PartialEq, Eq)]
    interface Cashier {
        event LogOrderCreated(
            uint256 indexed _tokenIdSupply,
            address _seller,
            bytes32 _promiseId,
            uint256 _quantity
        );

        event LogVoucherDelivered(
            uint256 indexed _tokenIdSupply,
            uint256 _tokenIdVoucher,
            address _issuer,
            address _holder,
            bytes32 _promiseId
        );

        function requestCreateOrder(
            string calldata _assetTitle,
            uint256 _validFrom,
            uint256 _validTo,
            uint256 _price,
            uint256 _depositSe,
            uint256 _depositBu,
            uint256 _quantity
        ) external payable;

        function requestVoucher(uint256 _tokenIdSupply, address _issuer) external payable;
    }

    /// Voucher lifecycle transitions.
    #[derive(Debug, PartialEq, Eq)]
    interface VoucherKernel {
        event LogVoucherDelivered(
            uint256 indexed _tokenIdSupply,
            uint256 _tokenIdVoucher,
            address _issuer,
            address _holder,
            bytes32 _promiseId
        );

        event LogVoucherRedeemed(uint256 _tokenIdVoucher, address _holder, bytes32 _promiseId);
        event LogVoucherRefunded(uint256 _tokenIdVoucher);
        event LogVoucherComplain(uint256 _tokenIdVoucher);
        event LogVoucherFaultCancel(uint256 _tokenIdVoucher);

        function redeem(uint256 _tokenIdVoucher) external;
        function refund(uint256 _tokenIdVoucher) external;
        function complain(uint256 _tokenIdVoucher) external;
        function cancelOrFault(uint256 _tokenIdVoucher) external;
    }

    /// Supply and voucher token (ERC-1155 supplies, ERC-721 vouchers).
    #[derive(Debug, PartialEq, Eq)]
    interface ERC1155ERC721 {
        event TransferSingle(
            address indexed _operator,
            address indexed _from,
            address indexed _to,
            uint256 _id,
            uint256 _value
        );

        event ApprovalForAll(address indexed _owner, address indexed _operator, bool _approved);
    }
}
